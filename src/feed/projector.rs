//! View projection
//!
//! Pure derivation of the visible list from the raw item list and the
//! preference state. Deterministic, never mutates its inputs, and keeps the
//! relative order of surviving items (stable filter, no re-sort). The
//! result is recomputed on every call; callers needing stability across
//! renders memoize on their side.
//!
//! Pipeline: section filter, then search filter.

use crate::content::{ContentItem, Section};
use crate::feed::preferences::PreferenceState;

/// Derive the ordered sequence of items to render.
pub fn project<'a>(items: &'a [ContentItem], prefs: &PreferenceState) -> Vec<&'a ContentItem> {
    let sectioned = items.iter().filter(|item| match prefs.active_section {
        Section::Favorites => prefs.is_favorite(&item.id),
        Section::Trending => item.trending,
        Section::Feed => {
            prefs.categories.is_empty()
                || prefs
                    .categories
                    .iter()
                    .any(|selected| category_matches(&item.category, selected))
        }
    });

    if prefs.search_query.is_empty() {
        sectioned.collect()
    } else {
        let query = prefs.search_query.to_lowercase();
        sectioned
            .filter(|item| {
                item.title.to_lowercase().contains(&query)
                    || item.category.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// Bidirectional case-insensitive substring match between an item's
/// free-form category and a selected menu category.
///
/// "Technology" matches both "Technology" and "technology-news"; equally,
/// a data category "Tech" matches the selected label "Technology". This
/// loose rule maps a fixed category menu onto free-form data labels. An
/// explicit alias table would be more predictable; the filter scenarios
/// shipped with the dashboard depend on the substring behavior, so it is
/// kept as-is.
pub fn category_matches(item_category: &str, selected: &str) -> bool {
    let item_category = item_category.to_lowercase();
    let selected = selected.to_lowercase();
    item_category.contains(&selected) || selected.contains(&item_category)
}
