//! Content List Engine
//!
//! Derives the dashboard's visible list from raw items, filters, favorites,
//! and paging state.
//!
//! ## Architecture
//!
//! 1. **Preferences** - the user's selected categories, favorites, active
//!    section, and search query; mutated only by explicit user actions
//! 2. **Store** - the ordered item list plus the pagination state machine
//!    (page counter, `has_more`, `loading`, stale-fetch generations)
//! 3. **Projector** - pure derivation of the visible list: section filter,
//!    then category filter, then search filter, order-preserving
//! 4. **Engine** - the owned object wiring store, preferences, content
//!    source, and preference storage together
//!
//! Control flow: user action mutates preferences or store, the projector
//! re-derives the visible list, rendering happens elsewhere.

pub mod engine;
pub mod preferences;
pub mod projector;
pub mod store;

// Re-export the types that are actually used externally
pub use engine::FeedEngine;
pub use preferences::PreferenceState;
pub use projector::project;
pub use store::{ContentStore, LoadOutcome, LoadTicket};
