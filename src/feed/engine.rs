//! Feed engine
//!
//! The explicitly owned state object tying the pieces together: content
//! store, preference state, content source, and preference storage. All
//! mutation goes through the operations here, so there is a single source
//! of truth without any hidden global singleton. Callers hand the engine
//! around by reference.
//!
//! Every preference mutation is written through to storage immediately,
//! mirroring the persist-on-every-change behavior of the dashboard.

use std::sync::Arc;
use tracing::{info, warn};

use crate::content::{ContentItem, Section};
use crate::feed::preferences::PreferenceState;
use crate::feed::projector::project;
use crate::feed::store::{ContentStore, LoadOutcome};
use crate::source::ContentSource;
use crate::storage::PreferenceStorage;

use crate::error::Result;

/// Owned engine state: content store + preferences + collaborators
pub struct FeedEngine {
    store: ContentStore,
    prefs: PreferenceState,
    source: Arc<dyn ContentSource>,
    storage: Option<PreferenceStorage>,
}

impl FeedEngine {
    /// Build an engine with a fresh store and default preferences.
    pub fn new(max_pages: u32, source: Arc<dyn ContentSource>) -> Self {
        Self {
            store: ContentStore::new(max_pages),
            prefs: PreferenceState::default(),
            source,
            storage: None,
        }
    }

    /// Attach preference storage, seeding the preference state from the
    /// stored document when one exists.
    pub fn with_storage(mut self, storage: PreferenceStorage) -> Result<Self> {
        if let Some(stored) = storage.load()? {
            info!("seeded preferences from {}", storage.path().display());
            self.prefs = stored.into_state();
        }
        self.storage = Some(storage);
        Ok(self)
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn prefs(&self) -> &PreferenceState {
        &self.prefs
    }

    /// The ordered list the UI should render right now
    pub fn visible(&self) -> Vec<&ContentItem> {
        project(self.store.items(), &self.prefs)
    }

    /// Load the next page from the content source.
    ///
    /// No-op (`LoadOutcome::Skipped`) while a load is in flight or once
    /// pagination is exhausted. A fetch failure clears the loading flag,
    /// records the message on the store, and propagates the error so the
    /// caller can offer a retry.
    pub async fn load_more(&mut self) -> Result<LoadOutcome> {
        let Some(ticket) = self.store.begin_load() else {
            return Ok(LoadOutcome::Skipped);
        };

        let page = ticket.page();
        match self.source.fetch_page(page).await {
            Ok(items) => Ok(self.store.complete_load(ticket, items)),
            Err(err) => {
                warn!(page, error = %err, "page fetch failed");
                self.store.fail_load(ticket, err.to_string());
                Err(err)
            }
        }
    }

    /// Move the item at `start` to `end` and persist the resulting order.
    pub fn reorder(&mut self, start: usize, end: usize) -> Result<()> {
        self.store.reorder(start, end)?;
        let order = self
            .store
            .items()
            .iter()
            .map(|item| item.id.clone())
            .collect();
        self.prefs.update_feed_order(order);
        self.persist()
    }

    /// Switch the active section.
    ///
    /// Changing section resets the content store so the section starts its
    /// own fresh pagination sequence; the reset also invalidates any fetch
    /// still in flight. Returns true if a reset happened.
    pub fn set_active_section(&mut self, section: Section) -> bool {
        if !self.prefs.set_active_section(section) {
            return false;
        }
        info!(section = %section, "section changed, resetting content");
        self.store.reset();
        true
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.prefs.set_search_query(query);
    }

    pub fn toggle_category(&mut self, name: &str) -> Result<()> {
        self.prefs.toggle_category(name);
        self.persist()
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let now_favorite = self.prefs.toggle_favorite(id);
        self.persist()?;
        Ok(now_favorite)
    }

    pub fn toggle_dark_mode(&mut self) -> Result<()> {
        self.prefs.toggle_dark_mode();
        self.persist()
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> Result<()> {
        self.prefs.set_language(language);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.save(&self.prefs),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSource;

    fn engine() -> FeedEngine {
        FeedEngine::new(3, Arc::new(MockSource::new()))
    }

    #[tokio::test]
    async fn test_load_more_appends_catalogue_pages() {
        let mut engine = engine();

        let outcome = engine.load_more().await.unwrap();
        assert_eq!(outcome, LoadOutcome::Appended { count: 8 });
        assert_eq!(engine.store().items().len(), 8);

        engine.load_more().await.unwrap();
        assert_eq!(engine.store().items().len(), 16);
        // Page 2 ids are suffixed, so uniqueness holds across pages.
        assert_eq!(engine.store().items()[8].id, "1-p2");
    }

    #[tokio::test]
    async fn test_pagination_terminates_at_cap() {
        let mut engine = engine();
        for _ in 0..3 {
            assert!(matches!(
                engine.load_more().await.unwrap(),
                LoadOutcome::Appended { .. }
            ));
        }
        assert!(!engine.store().has_more());
        assert_eq!(engine.load_more().await.unwrap(), LoadOutcome::Skipped);
        assert_eq!(engine.store().items().len(), 24);
    }

    #[tokio::test]
    async fn test_section_change_resets_store() {
        let mut engine = engine();
        engine.load_more().await.unwrap();
        assert!(!engine.store().items().is_empty());

        assert!(engine.set_active_section(Section::Trending));
        assert!(engine.store().items().is_empty());
        assert_eq!(engine.store().current_page(), 1);
        assert!(engine.store().has_more());

        // Re-selecting the same section does not reset again.
        engine.load_more().await.unwrap();
        assert!(!engine.set_active_section(Section::Trending));
        assert!(!engine.store().items().is_empty());
    }

    #[tokio::test]
    async fn test_visible_reflects_section_and_favorites() {
        let mut engine = engine();
        engine.load_more().await.unwrap();

        engine.toggle_favorite("2").unwrap();
        engine.toggle_favorite("4").unwrap();
        engine.set_active_section(Section::Favorites);
        // Favorites projection works against whatever is loaded.
        engine.load_more().await.unwrap();

        let visible: Vec<&str> = engine.visible().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(visible, vec!["2", "4"]);
    }

    #[tokio::test]
    async fn test_reorder_records_feed_order() {
        let mut engine = engine();
        engine.load_more().await.unwrap();

        engine.reorder(0, 2).unwrap();
        assert_eq!(engine.store().items()[2].id, "1");
        assert_eq!(engine.prefs().feed_order[0], "2");
        assert_eq!(engine.prefs().feed_order[2], "1");
    }
}
