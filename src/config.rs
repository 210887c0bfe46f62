//! Configuration management for the FeedDeck engine
//!
//! Provides strongly-typed configuration with validation, environment variable
//! parsing, and sensible defaults. Supports both development and production
//! environments.
//!
//! # Example
//! ```no_run
//! use feeddeck::Config;
//! let config = Config::from_env().expect("failed to load config");
//! println!("page size: {}", config.feed.page_size);
//! ```

use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::error::{Error, Result};

/// Default number of pages served before pagination is declared exhausted.
/// Demo content recycles a fixed catalogue, so infinite scroll needs a
/// deterministic termination rule.
pub const DEFAULT_MAX_PAGES: u32 = 3;

/// Default number of items per fetched page
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Feed/pagination configuration
    pub feed: FeedConfig,
    /// Content source configuration
    pub source: SourceConfig,
    /// Preference storage configuration
    pub storage: StorageConfig,
}

/// Feed/pagination configuration
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Items per fetched page
    pub page_size: usize,
    /// Pages served before `has_more` flips to false
    pub max_pages: u32,
}

/// Which content source backs the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Built-in demo catalogue
    Mock,
    /// NewsAPI top-headlines adapter
    NewsApi,
}

/// Content source configuration
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Which backend to use
    pub kind: SourceKind,
    /// NewsAPI base URL (overridable for tests)
    pub newsapi_base_url: String,
    /// NewsAPI key; required only when `kind == NewsApi`
    pub newsapi_key: Option<String>,
    /// Per-request timeout for HTTP sources
    pub request_timeout: Duration,
}

/// Preference storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path of the JSON preference document
    pub path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore if not found)
        dotenvy::dotenv().ok();

        let config = Self {
            feed: FeedConfig::from_env()?,
            source: SourceConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        };

        config.validate()?;
        config.log_summary();

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.feed.page_size == 0 {
            return Err(Error::InvalidConfig {
                key: "FEED_PAGE_SIZE",
                message: "page size must be at least 1".into(),
            });
        }

        if self.feed.max_pages == 0 {
            return Err(Error::InvalidConfig {
                key: "FEED_MAX_PAGES",
                message: "page cap must be at least 1".into(),
            });
        }

        if self.source.kind == SourceKind::NewsApi && self.source.newsapi_key.is_none() {
            return Err(Error::InvalidConfig {
                key: "NEWSAPI_KEY",
                message: "NewsAPI source selected but no API key set".into(),
            });
        }

        Ok(())
    }

    /// Log configuration summary (without sensitive data)
    fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  Feed:");
        info!("    Page Size: {}", self.feed.page_size);
        info!("    Page Cap: {}", self.feed.max_pages);
        info!("  Source:");
        info!("    Kind: {:?}", self.source.kind);
        if self.source.kind == SourceKind::NewsApi {
            info!("    Base URL: {}", self.source.newsapi_base_url);
            info!("    API Key: {}", mask_secret(self.source.newsapi_key.as_deref()));
        }
        info!("  Storage:");
        info!("    Path: {}", self.storage.path.display());
    }
}

impl FeedConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            page_size: get_env_or("FEED_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
                .parse()
                .unwrap_or(DEFAULT_PAGE_SIZE),
            max_pages: get_env_or("FEED_MAX_PAGES", &DEFAULT_MAX_PAGES.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAX_PAGES),
        })
    }
}

impl SourceConfig {
    fn from_env() -> Result<Self> {
        let kind = match get_env_or("CONTENT_SOURCE", "mock").as_str() {
            "newsapi" => SourceKind::NewsApi,
            _ => SourceKind::Mock,
        };

        let newsapi_key = {
            let s = get_env_or("NEWSAPI_KEY", "");
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        };

        Ok(Self {
            kind,
            newsapi_base_url: get_env_or("NEWSAPI_BASE_URL", "https://newsapi.org"),
            newsapi_key,
            request_timeout: Duration::from_millis(
                get_env_or("SOURCE_TIMEOUT_MS", "10000")
                    .parse()
                    .unwrap_or(10000),
            ),
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self> {
        let path = get_env_or("PREFS_PATH", "feeddeck-preferences.json");
        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get environment variable with default
fn get_env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Mask a secret for log output
fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        Some(s) if s.len() > 4 => format!("{}****", &s[..4]),
        Some(_) => "****".to_string(),
        None => "(unset)".to_string(),
    }
}
