//! Content domain types
//!
//! `ContentItem` is the unit everything else operates on: immutable once
//! created, identified by a string id that stays stable across reorders and
//! pagination. Id uniqueness within a store snapshot is the loader's job
//! (duplicate ids from later pages are disambiguated with a page suffix
//! before insertion); the engine never deduplicates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// What kind of media an item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    News,
    Movie,
    Music,
    Social,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::News => write!(f, "news"),
            ContentKind::Movie => write!(f, "movie"),
            ContentKind::Music => write!(f, "music"),
            ContentKind::Social => write!(f, "social"),
        }
    }
}

/// A single piece of mixed-media content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Globally unique id, stable across reorders and pagination
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form category label, e.g. "Technology"
    pub category: String,
    pub kind: ContentKind,
    pub image_url: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    /// Currently trending? Absent in source data means false.
    #[serde(default)]
    pub trending: bool,
    /// Display-only read-time string, e.g. "8 min read"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl ContentItem {
    /// Clone this item with the page number appended to its id.
    ///
    /// Used by sources that recycle a fixed catalogue across pages: id
    /// uniqueness within a store snapshot must hold, and disambiguation is
    /// the loader's responsibility.
    pub fn with_page_suffix(&self, page: u32) -> Self {
        Self {
            id: format!("{}-p{}", self.id, page),
            ..self.clone()
        }
    }
}

/// The dashboard section the user is looking at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Personalized feed, filtered by the user's selected categories
    #[default]
    Feed,
    /// Items flagged as trending
    Trending,
    /// Items the user has favorited
    Favorites,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Feed => "feed",
            Section::Trending => "trending",
            Section::Favorites => "favorites",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = Error;

    /// Parse a section label. Unknown labels are rejected so callers
    /// holding untrusted strings fail here rather than corrupting state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed" => Ok(Section::Feed),
            "trending" => Ok(Section::Trending),
            "favorites" => Ok(Section::Favorites),
            other => Err(Error::InvalidSection {
                value: other.to_string(),
            }),
        }
    }
}
