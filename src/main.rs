//! FeedDeck demo binary
//!
//! Drives the content list engine from the command line: loads pages from
//! the configured source until pagination is exhausted, then walks through
//! the dashboard sections and logs what each one would render.

use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use feeddeck::config::SourceKind;
use feeddeck::source::{MockSource, NewsApiSource};
use feeddeck::{Config, ContentSource, FeedEngine, PreferenceStorage, Result, Section};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("═══════════════════════════════════════════════════════");
    info!("  🗞️  FeedDeck Engine v{}", env!("CARGO_PKG_VERSION"));
    info!("═══════════════════════════════════════════════════════");

    let config = Config::from_env()?;

    let source: Arc<dyn ContentSource> = match config.source.kind {
        SourceKind::Mock => Arc::new(MockSource::with_page_size(config.feed.page_size)),
        SourceKind::NewsApi => Arc::new(NewsApiSource::new(
            &config.source,
            "technology",
            config.feed.page_size,
        )?),
    };

    let storage = PreferenceStorage::new(config.storage.path.clone());
    let mut engine = FeedEngine::new(config.feed.max_pages, source).with_storage(storage)?;

    info!(
        "preferences: categories={:?} favorites={}",
        engine.prefs().categories,
        engine.prefs().favorite_items.len()
    );

    // Fill the feed until the page cap declares exhaustion.
    while engine.store().has_more() {
        match engine.load_more().await {
            Ok(outcome) => info!(?outcome, page = engine.store().current_page(), "loaded"),
            Err(err) => {
                warn!(error = %err, "load failed, stopping demo loop");
                break;
            }
        }
    }

    for section in [Section::Feed, Section::Trending, Section::Favorites] {
        // Switching sections resets pagination, so reload before projecting.
        if engine.set_active_section(section) {
            while engine.store().has_more() {
                if engine.load_more().await.is_err() {
                    break;
                }
            }
        }
        let visible = engine.visible();
        info!("── {} ── {} items", section, visible.len());
        for item in visible.iter().take(5) {
            info!(
                "  [{}] {} ({})",
                item.kind, item.title, item.category
            );
        }
    }

    info!("👋 FeedDeck demo finished");
    Ok(())
}

/// Initialize structured logging with tracing
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Default log levels
        EnvFilter::new("feeddeck=debug,reqwest=warn,info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .init();
}
