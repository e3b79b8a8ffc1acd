//! Tavily Search Provider
//!
//! Integration with the Tavily web search API, which returns ranked results
//! with extracted page content suitable for use as fact-checking evidence.
//!
//! # Features
//!
//! - Async HTTP communication with the Tavily REST API
//! - Configurable endpoint (tests point this at a local server)
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use verifact_domain::traits::SearchProvider;
use verifact_domain::SearchResult;

/// Default Tavily API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.tavily.com";

/// Default timeout for search requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Tavily web search provider
pub struct TavilySearch {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the Tavily search API
#[derive(Serialize)]
struct TavilySearchRequest {
    api_key: String,
    query: String,
    max_results: usize,
}

/// Response from the Tavily search API
#[derive(Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

/// One result entry in a Tavily response
#[derive(Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    content: Option<String>,
}

impl TavilySearch {
    /// Create a new Tavily provider against the public API.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use verifact_providers::TavilySearch;
    ///
    /// let provider = TavilySearch::new("tvly-...");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create a provider against a specific endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the maximum number of retry attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    async fn search_once(
        &self,
        request_body: &TavilySearchRequest,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let url = format!("{}/search", self.endpoint);

        let response = self
            .client
            .post(&url)
            .json(request_body)
            .send()
            .await
            .map_err(|e| ProviderError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ProviderError::Auth(format!("Tavily rejected credentials ({})", status)));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: TavilySearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(parsed
            .results
            .into_iter()
            .map(|r| SearchResult {
                title: r.title,
                url: r.url,
                content: r.content.filter(|c| !c.is_empty()),
            })
            .collect())
    }
}

#[async_trait]
impl SearchProvider for TavilySearch {
    type Error = ProviderError;

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, Self::Error> {
        let request_body = TavilySearchRequest {
            api_key: self.api_key.clone(),
            query: query.to_string(),
            max_results,
        };

        // Retry transient failures with exponential backoff; auth failures
        // and malformed responses are returned immediately.
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.search_once(&request_body).await {
                Ok(results) => return Ok(results),
                Err(e @ ProviderError::Communication(_)) => last_error = Some(e),
                Err(e) => return Err(e),
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| ProviderError::Communication("Max retries exceeded".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tavily_creation() {
        let provider = TavilySearch::new("tvly-test");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_tavily_with_endpoint_and_retries() {
        let provider =
            TavilySearch::with_endpoint("http://localhost:9999", "key").with_max_retries(1);
        assert_eq!(provider.endpoint, "http://localhost:9999");
        assert_eq!(provider.max_retries, 1);
    }

    #[test]
    fn test_response_parsing_tolerates_missing_content() {
        let body = r#"{"results": [
            {"title": "Eiffel Tower", "url": "https://en.wikipedia.org/wiki/Eiffel_Tower", "content": "The tower is in Paris."},
            {"title": "No content here", "url": "https://example.com"}
        ]}"#;

        let parsed: TavilySearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert!(parsed.results[0].content.is_some());
        assert!(parsed.results[1].content.is_none());
    }

    #[tokio::test]
    async fn test_tavily_error_handling() {
        // Unroutable endpoint to trigger a communication error
        let provider =
            TavilySearch::with_endpoint("http://127.0.0.1:9", "key").with_max_retries(1);

        let result = provider.search("test", 3).await;
        assert!(matches!(result, Err(ProviderError::Communication(_))));
    }
}
