//! Content sources
//!
//! The content store depends only on the [`ContentSource`] seam: one call,
//! `fetch_page`, returning one page's worth of items. Behind it sits either
//! the built-in demo catalogue or a thin adapter over a third-party content
//! API.

use async_trait::async_trait;

use crate::content::ContentItem;
use crate::error::Result;

pub mod mock;
pub mod newsapi;

pub use mock::MockSource;
pub use newsapi::NewsApiSource;

/// Supplier of paginated content
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one page of items. Page numbers start at 1.
    ///
    /// The source is responsible for id uniqueness across pages; the store
    /// never deduplicates.
    async fn fetch_page(&self, page: u32) -> Result<Vec<ContentItem>>;
}
