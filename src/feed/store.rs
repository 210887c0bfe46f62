//! Content store state machine
//!
//! Holds the ordered item list plus the pagination flags (`current_page`,
//! `has_more`, `loading`). A load is split into `begin_load` /
//! `complete_load` so the asynchronous fetch can happen in between without
//! the store holding a future: `begin_load` hands out a [`LoadTicket`]
//! stamped with the store generation, and a ticket whose generation no
//! longer matches at completion time is discarded. That is how a fetch that
//! resolves after a section switch (which resets the store) is prevented
//! from leaking stale items into the fresh list.
//!
//! Mutual exclusion of in-flight loads is the `loading` flag: all mutation
//! happens on a single logical consumer, so no lock is needed, only the
//! guard.

use tracing::{debug, warn};

use crate::content::ContentItem;
use crate::error::{Error, Result};

/// Proof that a load was admitted, stamped with the page it was issued for
/// and the store generation at issue time.
#[derive(Debug)]
pub struct LoadTicket {
    page: u32,
    generation: u64,
}

impl LoadTicket {
    /// Page number this ticket authorizes fetching
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What happened to a completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Items were appended to the list
    Appended { count: usize },
    /// The store was reset while the fetch was in flight; result dropped
    Discarded,
    /// No load was admitted (already loading, or pagination exhausted)
    Skipped,
}

/// Ordered content list plus pagination state machine
#[derive(Debug)]
pub struct ContentStore {
    items: Vec<ContentItem>,
    current_page: u32,
    has_more: bool,
    loading: bool,
    last_error: Option<String>,
    generation: u64,
    max_pages: u32,
}

impl ContentStore {
    /// Create an empty store with the given page cap.
    ///
    /// The cap is the deterministic termination rule for infinite scroll:
    /// after `max_pages` successful loads, `has_more` is false and further
    /// loads are no-ops.
    pub fn new(max_pages: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            has_more: true,
            loading: false,
            last_error: None,
            generation: 0,
            max_pages,
        }
    }

    /// The display/drag-ordered item list
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Next page a load would fetch; starts at 1
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// False once the page cap has been reached
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// True only while a load is in flight
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the most recent failed load, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Admit a load if one is allowed right now.
    ///
    /// Returns `None` when a load is already in flight or pagination is
    /// exhausted; both are normal no-op conditions, not errors.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.loading || !self.has_more {
            debug!(
                loading = self.loading,
                has_more = self.has_more,
                "load skipped"
            );
            return None;
        }
        self.loading = true;
        Some(LoadTicket {
            page: self.current_page,
            generation: self.generation,
        })
    }

    /// Append a fetched page and advance pagination.
    ///
    /// A ticket issued before a `reset()` is stale and its items are
    /// dropped without touching the store.
    pub fn complete_load(&mut self, ticket: LoadTicket, mut page_items: Vec<ContentItem>) -> LoadOutcome {
        if ticket.generation != self.generation {
            warn!(
                page = ticket.page,
                "discarding stale page fetched before reset"
            );
            return LoadOutcome::Discarded;
        }

        let count = page_items.len();
        self.items.append(&mut page_items);
        self.current_page += 1;
        if self.current_page > self.max_pages {
            self.has_more = false;
        }
        self.loading = false;
        self.last_error = None;

        debug!(
            page = ticket.page,
            appended = count,
            total = self.items.len(),
            has_more = self.has_more,
            "page appended"
        );
        LoadOutcome::Appended { count }
    }

    /// Record a failed load.
    ///
    /// Clears `loading` so the flag is never left stuck, records the
    /// message for the UI, and leaves `items`/`has_more` untouched so the
    /// caller can retry. A stale ticket is ignored entirely.
    pub fn fail_load(&mut self, ticket: LoadTicket, message: impl Into<String>) {
        if ticket.generation != self.generation {
            return;
        }
        self.loading = false;
        self.last_error = Some(message.into());
    }

    /// Move the item at `start` to `end`, keeping all other relative order.
    ///
    /// A single-element move, not a swap. Out-of-range indices are caller
    /// bugs and leave the store unmodified. `start == end` is a no-op.
    pub fn reorder(&mut self, start: usize, end: usize) -> Result<()> {
        let len = self.items.len();
        for index in [start, end] {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }
        if start == end {
            return Ok(());
        }

        let moved = self.items.remove(start);
        self.items.insert(end, moved);
        Ok(())
    }

    /// Clear the list and restart pagination from page 1.
    ///
    /// Bumps the generation so any in-flight ticket becomes stale. Called
    /// whenever the active section changes.
    pub fn reset(&mut self) {
        self.items.clear();
        self.current_page = 1;
        self.has_more = true;
        self.loading = false;
        self.last_error = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::content::ContentKind;

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: format!("title {}", id),
            description: String::new(),
            category: "Technology".to_string(),
            kind: ContentKind::News,
            image_url: String::new(),
            url: String::new(),
            published_at: Utc::now(),
            trending: false,
            read_time: None,
        }
    }

    fn ids(store: &ContentStore) -> Vec<&str> {
        store.items().iter().map(|i| i.id.as_str()).collect()
    }

    fn load_page(store: &mut ContentStore, ids: &[&str]) -> LoadOutcome {
        let ticket = store.begin_load().expect("load should be admitted");
        store.complete_load(ticket, ids.iter().map(|id| item(id)).collect())
    }

    #[test]
    fn test_load_appends_and_advances_page() {
        let mut store = ContentStore::new(3);
        assert_eq!(store.current_page(), 1);

        let outcome = load_page(&mut store, &["1", "2"]);
        assert_eq!(outcome, LoadOutcome::Appended { count: 2 });
        assert_eq!(store.current_page(), 2);
        assert!(store.has_more());
        assert!(!store.loading());

        load_page(&mut store, &["3"]);
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_concurrent_loads() {
        let mut store = ContentStore::new(3);
        let ticket = store.begin_load().unwrap();
        // Second admission while the first is in flight must be refused.
        assert!(store.begin_load().is_none());
        store.complete_load(ticket, vec![item("1")]);
        assert!(store.begin_load().is_some());
    }

    #[test]
    fn test_page_cap_terminates_pagination() {
        let mut store = ContentStore::new(3);
        load_page(&mut store, &["a"]);
        load_page(&mut store, &["b"]);
        assert!(store.has_more());
        load_page(&mut store, &["c"]);
        assert!(!store.has_more());

        // Fourth load is a no-op.
        assert!(store.begin_load().is_none());
        assert_eq!(store.items().len(), 3);
    }

    #[test]
    fn test_failed_load_clears_loading_and_preserves_state() {
        let mut store = ContentStore::new(3);
        load_page(&mut store, &["1", "2"]);

        let ticket = store.begin_load().unwrap();
        store.fail_load(ticket, "feed unavailable");

        assert!(!store.loading());
        assert!(store.has_more());
        assert_eq!(ids(&store), vec!["1", "2"]);
        assert_eq!(store.last_error(), Some("feed unavailable"));

        // Retry succeeds and clears the recorded error.
        load_page(&mut store, &["3"]);
        assert_eq!(store.last_error(), None);
    }

    #[test]
    fn test_stale_completion_after_reset_is_discarded() {
        let mut store = ContentStore::new(3);
        let ticket = store.begin_load().unwrap();

        // Section switch resets the store while the fetch is in flight.
        store.reset();

        let outcome = store.complete_load(ticket, vec![item("stale")]);
        assert_eq!(outcome, LoadOutcome::Discarded);
        assert!(store.items().is_empty());
        assert_eq!(store.current_page(), 1);
        assert!(!store.loading());
    }

    #[test]
    fn test_stale_failure_after_reset_is_ignored() {
        let mut store = ContentStore::new(3);
        let ticket = store.begin_load().unwrap();
        store.reset();
        store.fail_load(ticket, "too late to matter");
        assert_eq!(store.last_error(), None);
    }

    #[test]
    fn test_reorder_moves_single_element() {
        let mut store = ContentStore::new(3);
        load_page(&mut store, &["1", "2", "3", "4", "5"]);

        store.reorder(1, 3).unwrap();
        assert_eq!(ids(&store), vec!["1", "3", "4", "2", "5"]);

        store.reorder(4, 0).unwrap();
        assert_eq!(ids(&store), vec!["5", "1", "3", "4", "2"]);
    }

    #[test]
    fn test_reorder_preserves_length_and_id_multiset() {
        let mut store = ContentStore::new(3);
        load_page(&mut store, &["1", "2", "3", "4"]);

        store.reorder(0, 3).unwrap();
        assert_eq!(store.items().len(), 4);
        let mut sorted: Vec<&str> = ids(&store);
        sorted.sort();
        assert_eq!(sorted, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut store = ContentStore::new(3);
        load_page(&mut store, &["1", "2", "3"]);
        let before = ids(&store).join(",");
        store.reorder(1, 1).unwrap();
        assert_eq!(ids(&store).join(","), before);
    }

    #[test]
    fn test_reorder_rejects_out_of_range() {
        let mut store = ContentStore::new(3);
        load_page(&mut store, &["1", "2"]);

        let err = store.reorder(0, 2).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(ids(&store), vec!["1", "2"]);

        assert!(store.reorder(5, 0).is_err());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut store = ContentStore::new(3);
        load_page(&mut store, &["1"]);
        load_page(&mut store, &["2"]);
        load_page(&mut store, &["3"]);
        assert!(!store.has_more());

        store.reset();
        assert!(store.items().is_empty());
        assert_eq!(store.current_page(), 1);
        assert!(store.has_more());
        assert!(!store.loading());
    }
}
