//! NewsAPI adapter
//!
//! Thin wrapper over the NewsAPI `top-headlines` endpoint, mapping article
//! JSON onto [`ContentItem`]. NewsAPI articles carry no stable id, so the
//! adapter mints one from the page number and the article's position, which
//! also keeps ids unique across pages.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::SourceConfig;
use crate::content::{ContentItem, ContentKind};
use crate::error::{Error, Result};
use crate::source::ContentSource;

/// NewsAPI `top-headlines` response envelope
#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

/// One NewsAPI article, only the fields we map
#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
}

/// Content source backed by NewsAPI top headlines
pub struct NewsApiSource {
    client: Client,
    base_url: String,
    api_key: String,
    /// Category sent to the API and stamped onto every mapped item
    category: String,
    page_size: usize,
}

impl NewsApiSource {
    /// Build from the source section of the configuration.
    ///
    /// `category` is the NewsAPI category slug to pull headlines for; it is
    /// also the free-form category label stamped onto mapped items, which
    /// the feed's substring matching then works against.
    pub fn new(config: &SourceConfig, category: impl Into<String>, page_size: usize) -> Result<Self> {
        let api_key = config
            .newsapi_key
            .clone()
            .ok_or_else(|| Error::config("NewsAPI source requires NEWSAPI_KEY"))?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.newsapi_base_url.trim_end_matches('/').to_string(),
            api_key,
            category: category.into(),
            page_size,
        })
    }

    #[cfg(test)]
    fn for_tests(base_url: &str, category: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(2))
                .build()
                .unwrap(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: "test-key".to_string(),
            category: category.to_string(),
            page_size: 8,
        }
    }

    fn map_articles(&self, articles: Vec<Article>, page: u32) -> Vec<ContentItem> {
        articles
            .into_iter()
            .enumerate()
            .filter_map(|(idx, article)| {
                // Articles without a title are placeholders for removed
                // content; skip them.
                let title = article.title?;
                Some(ContentItem {
                    id: format!("news-{}-{}", page, idx + 1),
                    title,
                    description: article.description.unwrap_or_default(),
                    category: self.category.clone(),
                    kind: ContentKind::News,
                    image_url: article.url_to_image.unwrap_or_default(),
                    url: article.url.unwrap_or_default(),
                    published_at: article.published_at.unwrap_or_else(Utc::now),
                    trending: false,
                    read_time: None,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ContentSource for NewsApiSource {
    #[instrument(skip(self))]
    async fn fetch_page(&self, page: u32) -> Result<Vec<ContentItem>> {
        let url = format!("{}/v2/top-headlines", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", self.category.as_str()),
                ("page", &page.to_string()),
                ("pageSize", &self.page_size.to_string()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: HeadlinesResponse = response.json().await?;
        if body.status != "ok" {
            return Err(Error::source(format!(
                "NewsAPI returned status '{}': {}",
                body.status,
                body.message.unwrap_or_default()
            )));
        }

        let items = self.map_articles(body.articles, page);
        debug!(page, count = items.len(), "fetched headlines page");
        Ok(items)
    }
}
