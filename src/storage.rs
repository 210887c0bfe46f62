//! Preference persistence
//!
//! Stores the persisted subset of the preference state as a JSON document
//! keyed by a fixed storage key, loaded once at startup to seed the
//! preference state and rewritten on every preference mutation. The
//! document is written through a named temp file in the target directory
//! and atomically renamed into place, so a crash mid-write never leaves a
//! truncated file.
//!
//! Only the whitelisted subset is persisted: selected categories,
//! favorites, language, dark mode, and the drag order. The active section
//! and search query are session state and start fresh.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::feed::preferences::PreferenceState;

/// Fixed key the preference document is stored under
pub const STORAGE_KEY: &str = "content-dashboard-storage";

/// The persisted subset of [`PreferenceState`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredPreferences {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub favorite_items: Vec<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub feed_order: Vec<String>,
}

impl From<&PreferenceState> for StoredPreferences {
    fn from(prefs: &PreferenceState) -> Self {
        Self {
            categories: prefs.categories.clone(),
            favorite_items: prefs.favorite_items.clone(),
            language: prefs.language.clone(),
            dark_mode: prefs.dark_mode,
            feed_order: prefs.feed_order.clone(),
        }
    }
}

impl StoredPreferences {
    /// Seed a fresh preference state from the stored subset.
    ///
    /// Non-persisted fields (active section, search query) keep their
    /// session defaults.
    pub fn into_state(self) -> PreferenceState {
        PreferenceState {
            categories: self.categories,
            favorite_items: self.favorite_items,
            language: self.language,
            dark_mode: self.dark_mode,
            feed_order: self.feed_order,
            ..Default::default()
        }
    }
}

/// File-backed key-value store for the preference document
#[derive(Debug, Clone)]
pub struct PreferenceStorage {
    path: PathBuf,
}

impl PreferenceStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored subset, if a valid document exists.
    ///
    /// A missing file is a fresh profile, not an error. A corrupt document
    /// is logged and treated as missing rather than blocking startup.
    pub fn load(&self) -> Result<Option<StoredPreferences>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no preference document, starting fresh");
                return Ok(None);
            }
            Err(err) => {
                return Err(Error::storage_with_source(
                    format!("failed to read {}", self.path.display()),
                    err,
                ))
            }
        };

        let document: HashMap<String, StoredPreferences> = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "corrupt preference document, ignoring"
                );
                return Ok(None);
            }
        };

        Ok(document.get(STORAGE_KEY).cloned())
    }

    /// Persist the whitelisted subset of `prefs`, atomically replacing the
    /// previous document.
    pub fn save(&self, prefs: &PreferenceState) -> Result<()> {
        let mut document = HashMap::with_capacity(1);
        document.insert(STORAGE_KEY.to_string(), StoredPreferences::from(prefs));
        let serialized = serde_json::to_string_pretty(&document)?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| {
            Error::storage_with_source(
                format!("failed to create temp file in {}", dir.display()),
                err,
            )
        })?;
        tmp.write_all(serialized.as_bytes()).map_err(|err| {
            Error::storage_with_source("failed to write preference document", err)
        })?;
        tmp.persist(&self.path).map_err(|err| {
            Error::storage_with_source(
                format!("failed to persist {}", self.path.display()),
                err.error,
            )
        })?;

        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> PreferenceStorage {
        PreferenceStorage::new(dir.path().join("prefs.json"))
    }

    #[test]
    fn test_missing_file_means_fresh_profile() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_round_trips_whitelisted_subset() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let mut prefs = PreferenceState::default();
        prefs.toggle_category("Gaming");
        prefs.toggle_favorite("2");
        prefs.toggle_favorite("4");
        prefs.toggle_dark_mode();
        prefs.set_language("de");
        prefs.set_search_query("not persisted");
        prefs.set_active_section(Section::Trending);

        storage.save(&prefs).unwrap();
        let restored = storage.load().unwrap().unwrap().into_state();

        assert_eq!(restored.categories, prefs.categories);
        assert_eq!(restored.favorite_items, vec!["2", "4"]);
        assert!(restored.dark_mode);
        assert_eq!(restored.language, "de");

        // Session state is not persisted.
        assert_eq!(restored.search_query, "");
        assert_eq!(restored.active_section, Section::Feed);
    }

    #[test]
    fn test_corrupt_document_is_ignored() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), "{not json").unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(
            storage.path(),
            format!(
                r#"{{
                    "some-other-app": {{ "categories": ["X"] }},
                    "{}": {{ "categories": ["Food"], "language": "fr" }}
                }}"#,
                STORAGE_KEY
            ),
        )
        .unwrap();

        let stored = storage.load().unwrap().unwrap();
        assert_eq!(stored.categories, vec!["Food"]);
        assert_eq!(stored.language, "fr");
        // Fields absent from the document fall back to defaults.
        assert!(stored.favorite_items.is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let mut prefs = PreferenceState::default();
        storage.save(&prefs).unwrap();
        prefs.toggle_favorite("8");
        storage.save(&prefs).unwrap();

        let restored = storage.load().unwrap().unwrap();
        assert_eq!(restored.favorite_items, vec!["8"]);
    }
}
