//! FeedDeck library crate
//!
//! Re-exports core modules for integration tests and external use.

pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod source;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use content::{ContentItem, ContentKind, Section};
pub use error::Result;
pub use feed::{FeedEngine, LoadOutcome, PreferenceState};
pub use source::ContentSource;
pub use storage::PreferenceStorage;
