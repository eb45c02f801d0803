// ABOUTME: Article endpoints: CRUD plus a lazy page-by-page listing stream
// ABOUTME: The stream keeps at most one page in memory, fetching on demand
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::pin::Pin;

use async_stream::try_stream;
use futures_util::Stream;

use crate::client::{ApiClient, RequestConfig};
use crate::envelope::Page;
use crate::errors::{ClientError, ClientResult};
use crate::models::article::{Article, ArticleCreate, ArticleQuery, ArticleUpdate};

/// Default page size for article streaming
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Minimum page size to prevent excessive API calls
pub const MIN_PAGE_SIZE: u32 = 5;

/// Maximum page size the backend accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration for article streaming behavior
#[derive(Debug, Clone, Copy)]
pub struct StreamConfig {
    /// Number of articles fetched per page
    pub page_size: u32,
    /// Maximum total articles to yield (`None` for unlimited)
    pub max_articles: Option<usize>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_articles: None,
        }
    }
}

impl StreamConfig {
    /// Create configuration with the given page size, clamped to the valid range
    #[must_use]
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
            max_articles: None,
        }
    }

    /// Cap the total number of articles yielded
    #[must_use]
    pub const fn with_max_articles(mut self, max: usize) -> Self {
        self.max_articles = Some(max);
        self
    }
}

/// Stream of articles fetched lazily page by page
pub type ArticleStream<'a> =
    Pin<Box<dyn Stream<Item = Result<Article, ClientError>> + Send + 'a>>;

/// Handle for the article endpoints
#[derive(Clone, Copy)]
pub struct ArticlesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> ArticlesApi<'a> {
    /// Create an article.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`] per the pipeline classification rules.
    pub async fn create(&self, article: &ArticleCreate) -> ClientResult<Article> {
        self.client
            .call(RequestConfig::post("/api/articles").with_json(article)?)
            .await
    }

    /// List articles matching the query, one page.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`] per the pipeline classification rules.
    pub async fn list(&self, query: &ArticleQuery) -> ClientResult<Page<Article>> {
        self.client
            .call(RequestConfig::get("/api/articles").with_query(query)?)
            .await
    }

    /// Fetch one article by id.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`] per the pipeline classification rules.
    pub async fn get(&self, id: i64) -> ClientResult<Article> {
        self.client
            .call(RequestConfig::get(format!("/api/articles/{id}")))
            .await
    }

    /// Update an article.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`] per the pipeline classification rules.
    pub async fn update(&self, id: i64, update: &ArticleUpdate) -> ClientResult<Article> {
        self.client
            .call(RequestConfig::put(format!("/api/articles/{id}")).with_json(update)?)
            .await
    }

    /// Delete an article.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`] per the pipeline classification rules.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .call(RequestConfig::delete(format!("/api/articles/{id}")))
            .await
    }

    /// Stream every article matching the query, fetching pages on demand.
    ///
    /// At most one page is buffered at a time. The stream ends after the
    /// server-reported last page, or earlier when `max_articles` is reached.
    #[must_use]
    pub fn stream(self, query: ArticleQuery, config: StreamConfig) -> ArticleStream<'a> {
        let page_size = config.page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        let max_articles = config.max_articles;

        Box::pin(try_stream! {
            let mut page = query.page.unwrap_or(1);
            let mut yielded: usize = 0;

            'pages: loop {
                if let Some(max) = max_articles {
                    if yielded >= max {
                        break;
                    }
                }

                let mut page_query = query.clone();
                page_query.page = Some(page);
                page_query.page_size = Some(page_size);

                let result = self.list(&page_query).await?;
                let is_last = result.items.is_empty() || page >= result.total_pages;

                for article in result.items {
                    if let Some(max) = max_articles {
                        if yielded >= max {
                            break 'pages;
                        }
                    }
                    yielded += 1;
                    yield article;
                }

                if is_last {
                    break;
                }
                page += 1;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_config_default() {
        let config = StreamConfig::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.max_articles.is_none());
    }

    #[test]
    fn test_stream_config_page_size_clamping() {
        assert_eq!(StreamConfig::with_page_size(1).page_size, MIN_PAGE_SIZE);
        assert_eq!(StreamConfig::with_page_size(500).page_size, MAX_PAGE_SIZE);
        assert_eq!(StreamConfig::with_page_size(50).page_size, 50);
    }

    #[test]
    fn test_stream_config_builder_chain() {
        let config = StreamConfig::with_page_size(30).with_max_articles(120);
        assert_eq!(config.page_size, 30);
        assert_eq!(config.max_articles, Some(120));
    }
}
