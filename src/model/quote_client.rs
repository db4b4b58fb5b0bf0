//! Quote provider API client
//!
//! Wraps the read-only endpoints of a quotable-compatible service:
//!
//! - `GET {base}/random[?tags={slug}]` → `{ "content", "author" }`
//! - `GET {base}/tags` → `[{ "slug", "name" }]`
//! - `GET {base}/quotes?author={term}&limit={n}` → `{ "results": [{ "content", "author" }] }`

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::{log_api_request, log_api_result};

use super::types::{Category, Quote};

pub const DEFAULT_BASE_URL: &str = "https://api.quotable.io";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request did not complete or returned a non-success status
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The body did not have the expected shape
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct QuotePayload {
    content: String,
    author: String,
}

impl From<QuotePayload> for Quote {
    fn from(payload: QuotePayload) -> Self {
        Quote::new(payload.content, payload.author)
    }
}

#[derive(Deserialize)]
struct SearchPayload {
    results: Vec<QuotePayload>,
}

/// Quote API client with a session-scoped category cache
#[derive(Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    categories: Arc<RwLock<Vec<Category>>>,
}

impl QuoteClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quoterm/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            categories: Arc::new(RwLock::new(Vec::new())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn fetch_random_quote(&self) -> Result<Quote, ClientError> {
        log_api_request!("random_quote");
        let result = self.get_json::<QuotePayload>("/random", &[]).await;
        log_api_result!("random_quote", result);
        Ok(result?.into())
    }

    /// An empty slug means "no category" and falls back to an unfiltered quote.
    pub async fn fetch_random_quote_by_category(&self, slug: &str) -> Result<Quote, ClientError> {
        if slug.is_empty() {
            return self.fetch_random_quote().await;
        }

        log_api_request!("random_quote_by_category", slug);
        let result = self
            .get_json::<QuotePayload>("/random", &[("tags", slug)])
            .await;
        log_api_result!("random_quote_by_category", result);
        Ok(result?.into())
    }

    /// Categories are fetched once; later calls return the cached list.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        if let Some(cached) = self.cached_categories().await {
            tracing::trace!(count = cached.len(), "Categories served from cache");
            return Ok(cached);
        }

        log_api_request!("categories");
        let result = self.get_json::<Vec<Category>>("/tags", &[]).await;
        log_api_result!("categories", result);
        let categories = result?;

        *self.categories.write().await = categories.clone();
        Ok(categories)
    }

    /// The cached category list, if it has been populated
    pub async fn cached_categories(&self) -> Option<Vec<Category>> {
        let categories = self.categories.read().await;
        if categories.is_empty() {
            None
        } else {
            Some(categories.clone())
        }
    }

    /// Zero matches is an empty list, not an error.
    pub async fn search_quotes_by_author(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<Quote>, ClientError> {
        log_api_request!("search_by_author", term, limit);
        let limit = limit.to_string();
        let result = self
            .get_json::<SearchPayload>("/quotes", &[("author", term), ("limit", limit.as_str())])
            .await;
        log_api_result!("search_by_author", result);
        Ok(result?.results.into_iter().map(Quote::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> QuoteClient {
        QuoteClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn random_quote_maps_content_and_author() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_id": "abc",
                "content": "Be yourself.",
                "author": "Oscar Wilde",
                "tags": ["famous-quotes"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let quote = client_for(&server).fetch_random_quote().await.unwrap();
        assert_eq!(quote, Quote::new("Be yourself.", "Oscar Wilde"));
    }

    #[tokio::test]
    async fn category_quote_sends_tags_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random"))
            .and(query_param("tags", "wisdom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": "Know thyself.",
                "author": "Socrates"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let quote = client_for(&server)
            .fetch_random_quote_by_category("wisdom")
            .await
            .unwrap();
        assert_eq!(quote.author, "Socrates");
    }

    #[tokio::test]
    async fn categories_are_fetched_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"_id": "1", "slug": "wisdom", "name": "Wisdom", "quoteCount": 10},
                {"_id": "2", "slug": "famous-quotes", "name": "Famous Quotes", "quoteCount": 4}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first = client.fetch_categories().await.unwrap();
        let second = client.fetch_categories().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first[1].slug, "famous-quotes");
    }

    #[tokio::test]
    async fn empty_category_list_is_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.fetch_categories().await.unwrap().is_empty());
        assert!(client.fetch_categories().await.unwrap().is_empty());
        assert!(client.cached_categories().await.is_none());
    }

    #[tokio::test]
    async fn search_sends_author_and_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quotes"))
            .and(query_param("author", "Wilde"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "results": [{"content": "Be yourself.", "author": "Oscar Wilde"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let results = client_for(&server)
            .search_quotes_by_author("Wilde", 5)
            .await
            .unwrap();
        assert_eq!(results, vec![Quote::new("Be yourself.", "Oscar Wilde")]);
    }

    #[tokio::test]
    async fn search_with_no_matches_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quotes"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})),
            )
            .mount(&server)
            .await;

        let results = client_for(&server)
            .search_quotes_by_author("Nobody", 5)
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_random_quote().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn missing_fields_are_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"content": "x"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_random_quote().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn error_status_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_random_quote().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = QuoteClient::new("https://example.com/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "https://example.com/api");
    }
}
