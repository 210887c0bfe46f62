//! Built-in demo catalogue
//!
//! A fixed set of mixed-media items served page after page. Page 1 returns
//! the catalogue as-is; later pages return clones with page-suffixed ids so
//! id uniqueness holds within a store snapshot.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::content::{ContentItem, ContentKind};
use crate::error::Result;
use crate::source::ContentSource;

static CATALOGUE: Lazy<Vec<ContentItem>> = Lazy::new(|| {
    vec![
        demo_item(
            "1",
            "Revolutionary AI Technology Transforms Healthcare Industry",
            "Breakthrough artificial intelligence solutions are revolutionizing patient care and medical diagnostics across hospitals worldwide.",
            "Technology",
            ContentKind::News,
            "2024-06-29T10:00:00Z",
            true,
            Some("8 min read"),
        ),
        demo_item(
            "2",
            "Dune: Part Two - Epic Science Fiction Returns",
            "Denis Villeneuve delivers another stunning chapter in the Dune saga with breathtaking visuals and compelling storytelling.",
            "Movies",
            ContentKind::Movie,
            "2024-06-28T15:30:00Z",
            true,
            Some("6 min read"),
        ),
        demo_item(
            "3",
            "Champions League Final Delivers Historic Performance",
            "An unforgettable match filled with drama, skill, and passion as two football giants clash in the ultimate showdown.",
            "Sports",
            ContentKind::News,
            "2024-06-28T20:00:00Z",
            false,
            Some("4 min read"),
        ),
        demo_item(
            "4",
            "Taylor Swift Announces Surprise Album",
            "The pop superstar surprises fans with an unexpected album announcement, featuring collaborations with industry legends.",
            "Music",
            ContentKind::Music,
            "2024-06-27T12:00:00Z",
            true,
            Some("3 min read"),
        ),
        demo_item(
            "5",
            "Gaming Industry Reaches New Heights in 2024",
            "Record-breaking sales and innovative game releases mark 2024 as a landmark year for the gaming industry.",
            "Gaming",
            ContentKind::News,
            "2024-06-27T09:15:00Z",
            false,
            Some("7 min read"),
        ),
        demo_item(
            "6",
            "Hidden Gems: Authentic Street Food Around the World",
            "Discover incredible street food destinations that locals love but tourists rarely find.",
            "Food",
            ContentKind::Social,
            "2024-06-26T14:45:00Z",
            false,
            Some("5 min read"),
        ),
        demo_item(
            "7",
            "Sustainable Travel: Top Eco-Friendly Destinations",
            "Explore stunning destinations that prioritize environmental conservation and sustainable tourism practices.",
            "Travel",
            ContentKind::Social,
            "2024-06-26T11:20:00Z",
            false,
            Some("6 min read"),
        ),
        demo_item(
            "8",
            "Quantum Computing Breakthrough Changes Everything",
            "Scientists achieve a major quantum computing milestone that could revolutionize cryptography and data processing.",
            "Technology",
            ContentKind::News,
            "2024-06-25T16:30:00Z",
            true,
            Some("9 min read"),
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn demo_item(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    kind: ContentKind,
    published_at: &str,
    trending: bool,
    read_time: Option<&str>,
) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        kind,
        image_url: format!("https://images.example.com/{}.jpg", id),
        url: format!("https://example.com/story/{}", id),
        published_at: published_at
            .parse::<DateTime<Utc>>()
            .expect("demo catalogue timestamps are valid ISO-8601"),
        trending,
        read_time: read_time.map(|s| s.to_string()),
    }
}

/// Demo source backed by the static catalogue
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    /// Cap on items per page; `None` serves the whole catalogue
    page_size: Option<usize>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: Some(page_size),
        }
    }

    /// The full demo catalogue, page-1 ids
    pub fn catalogue() -> &'static [ContentItem] {
        &CATALOGUE
    }
}

#[async_trait]
impl ContentSource for MockSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<ContentItem>> {
        let take = self.page_size.unwrap_or(CATALOGUE.len());
        let items: Vec<ContentItem> = CATALOGUE
            .iter()
            .take(take)
            .map(|item| {
                if page == 1 {
                    item.clone()
                } else {
                    item.with_page_suffix(page)
                }
            })
            .collect();

        debug!(page, count = items.len(), "served demo page");
        Ok(items)
    }
}
