//! User preference state
//!
//! Holds everything the user has told us about what they want to see:
//! selected categories, favorited item ids, the active section, and the
//! current search query, plus the display-only preferences (dark mode,
//! language) and the persisted drag order. Mutated only through the
//! operations below; the view projector reads it but never writes it.
//!
//! `categories` and `favorite_items` are insertion-ordered sets held as
//! vectors: lookup is linear but the sets are tiny, and insertion order
//! matters for displaying the selected-categories list.

use serde::{Deserialize, Serialize};

use crate::content::Section;

/// Categories a fresh profile starts with
pub const DEFAULT_CATEGORIES: &[&str] = &["Technology", "News", "Movies"];

/// Language a fresh profile starts with
pub const DEFAULT_LANGUAGE: &str = "en";

/// The user's preference state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceState {
    /// Selected category labels, in insertion order
    pub categories: Vec<String>,
    /// Favorited item ids, in insertion order. Stale ids (items no longer
    /// loaded) are tolerated, not purged; favoriting a not-yet-loaded id is
    /// legal and inert until that item appears.
    pub favorite_items: Vec<String>,
    /// Which dashboard section is active
    pub active_section: Section,
    /// Search query, stored verbatim
    pub search_query: String,
    /// Display-only: dark mode toggle
    pub dark_mode: bool,
    /// Display-only: UI language code
    pub language: String,
    /// Item-id order produced by the latest drag reorder
    pub feed_order: Vec<String>,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            favorite_items: Vec::new(),
            active_section: Section::default(),
            search_query: String::new(),
            dark_mode: false,
            language: DEFAULT_LANGUAGE.to_string(),
            feed_order: Vec::new(),
        }
    }
}

impl PreferenceState {
    /// Remove `name` from the selected categories if present, else append it.
    /// Toggling twice restores the original set.
    pub fn toggle_category(&mut self, name: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == name) {
            self.categories.remove(pos);
        } else {
            self.categories.push(name.to_string());
        }
    }

    /// Symmetric add/remove of `id` in the favorites set.
    ///
    /// No validation that `id` refers to a loaded item. Returns true if the
    /// id is a favorite after the toggle.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if let Some(pos) = self.favorite_items.iter().position(|f| f == id) {
            self.favorite_items.remove(pos);
            false
        } else {
            self.favorite_items.push(id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_items.iter().any(|f| f == id)
    }

    /// Replace the active section. Returns true if the section actually
    /// changed, which is the caller's cue to reset the content store.
    /// Invalid section labels never reach this method; they are rejected
    /// when parsing into [`Section`].
    pub fn set_active_section(&mut self, section: Section) -> bool {
        if self.active_section == section {
            return false;
        }
        self.active_section = section;
        true
    }

    /// Replace the search query verbatim; no trimming or validation
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Replace the persisted drag order wholesale
    pub fn update_feed_order(&mut self, order: Vec<String>) {
        self.feed_order = order;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }
}
