//! Verifact Provider Layer
//!
//! Pluggable implementations of the `SearchProvider` and `CompletionProvider`
//! traits from `verifact-domain`.
//!
//! # Providers
//!
//! - `MockSearch` / `MockCompletion`: deterministic mocks for testing
//! - `TavilySearch`: Tavily web search API integration
//! - `GeminiCompletion`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use verifact_providers::MockCompletion;
//! use verifact_domain::traits::CompletionProvider;
//! use verifact_domain::Message;
//!
//! # tokio_test::block_on(async {
//! let provider = MockCompletion::new("TRUE. The evidence agrees.");
//! let prompt = vec![Message::user("Claim: water is wet")];
//! let verdict = provider.complete(&prompt).await.unwrap();
//! assert_eq!(verdict, "TRUE. The evidence agrees.");
//! # });
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod tavily;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use verifact_domain::traits::{CompletionProvider, SearchProvider};
use verifact_domain::{Message, SearchResult};

pub use gemini::GeminiCompletion;
pub use tavily::TavilySearch;

/// Errors that can occur during provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credentials rejected by the provider
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Requested model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Provider error: {0}")]
    Other(String),
}

/// Mock search provider for deterministic testing
///
/// Returns pre-configured results without making any network calls, and
/// counts invocations so tests can assert that evidence is fetched fresh on
/// every turn.
#[derive(Debug, Clone, Default)]
pub struct MockSearch {
    results: Arc<Mutex<Vec<SearchResult>>>,
    fail: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSearch {
    /// Create a provider that returns the given results for every query.
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results)),
            fail: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that returns no results.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Make every subsequent call fail with a communication error.
    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Replace the canned results.
    pub fn set_results(&self, results: Vec<SearchResult>) {
        *self.results.lock().unwrap() = results;
    }

    /// Get the number of times `search` was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    type Error = ProviderError;

    async fn search(
        &self,
        _query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if *self.fail.lock().unwrap() {
            return Err(ProviderError::Communication("Mock search failure".to_string()));
        }

        let results = self.results.lock().unwrap();
        Ok(results.iter().take(max_results).cloned().collect())
    }
}

/// Mock completion provider for deterministic testing
///
/// Returns a fixed response, records the last prompt it was given, and counts
/// invocations.
#[derive(Debug, Clone)]
pub struct MockCompletion {
    response: Arc<Mutex<String>>,
    fail: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Vec<Message>>>,
}

impl MockCompletion {
    /// Create a provider with a fixed response for all prompts.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Arc::new(Mutex::new(response.into())),
            fail: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Change the fixed response.
    pub fn set_response(&self, response: impl Into<String>) {
        *self.response.lock().unwrap() = response.into();
    }

    /// Make every subsequent call fail with a communication error.
    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Get the number of times `complete` was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent prompt passed to `complete`.
    pub fn last_prompt(&self) -> Vec<Message> {
        self.last_prompt.lock().unwrap().clone()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new("Default mock verdict")
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    type Error = ProviderError;

    async fn complete(&self, messages: &[Message]) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_prompt.lock().unwrap() = messages.to_vec();

        if *self.fail.lock().unwrap() {
            return Err(ProviderError::Communication("Mock completion failure".to_string()));
        }

        Ok(self.response.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_search_returns_canned_results() {
        let provider = MockSearch::new(vec![
            SearchResult::new("A", "https://a.example", "text a"),
            SearchResult::new("B", "https://b.example", "text b"),
        ]);

        let results = provider.search("anything", 3).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "A");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_search_caps_results() {
        let provider = MockSearch::new(vec![
            SearchResult::new("A", "https://a.example", "a"),
            SearchResult::new("B", "https://b.example", "b"),
            SearchResult::new("C", "https://c.example", "c"),
            SearchResult::new("D", "https://d.example", "d"),
        ]);

        let results = provider.search("anything", 3).await.unwrap();
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_search_failure() {
        let provider = MockSearch::empty();
        provider.set_failing(true);

        let result = provider.search("anything", 3).await;
        assert!(matches!(result, Err(ProviderError::Communication(_))));
    }

    #[tokio::test]
    async fn test_mock_completion_records_prompt() {
        let provider = MockCompletion::new("FALSE. Not supported.");
        let prompt = vec![
            Message::system("You are a fact-checker"),
            Message::user("Claim: up is down"),
        ];

        let verdict = provider.complete(&prompt).await.unwrap();
        assert_eq!(verdict, "FALSE. Not supported.");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.last_prompt(), prompt);
    }

    #[tokio::test]
    async fn test_mock_completion_failure() {
        let provider = MockCompletion::default();
        provider.set_failing(true);

        let result = provider.complete(&[Message::user("hi")]).await;
        assert!(matches!(result, Err(ProviderError::Communication(_))));
    }

    #[tokio::test]
    async fn test_mocks_share_state_across_clones() {
        let provider = MockCompletion::new("v");
        let clone = provider.clone();

        provider.complete(&[Message::user("x")]).await.unwrap();
        assert_eq!(clone.call_count(), 1);
    }
}
