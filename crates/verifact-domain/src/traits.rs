//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the workflow engine and
//! infrastructure. Implementations live in other crates: concrete providers
//! in `verifact-providers`, checkpoint stores in `verifact-store`.

use crate::message::Message;
use crate::state::ConversationState;
use crate::thread::ThreadId;
use async_trait::async_trait;

/// One result returned by a search provider.
///
/// `content` may be absent; such entries still count toward the source list
/// but contribute nothing to the evidence text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Page title
    pub title: String,

    /// Page URL
    pub url: String,

    /// Extracted page text, if the provider supplied any
    pub content: Option<String>,
}

impl SearchResult {
    /// Create a result with content.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: Some(content.into()),
        }
    }

    /// Create a result without content.
    pub fn without_content(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: None,
        }
    }
}

/// Trait for evidence retrieval.
///
/// Implementations are stateless with respect to conversation data and safe
/// for concurrent use by multiple in-flight turns.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Error type for search operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search for evidence about `query`, returning at most `max_results`
    /// results in provider ranking order.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, Self::Error>;
}

/// Trait for LLM text completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Error type for completion operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Complete a chat-style prompt, returning the response text.
    async fn complete(&self, messages: &[Message]) -> Result<String, Self::Error>;
}

/// Trait for thread-scoped conversation persistence.
///
/// The store exclusively owns the durable copy of each conversation; the
/// engine works on a transient copy and hands it back via `save` only when a
/// turn completes. `save` must atomically replace the stored state for one
/// thread; operations on distinct threads must not corrupt one another.
#[async_trait]
pub trait CheckpointStore: Send + Sync {
    /// Error type for store operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the state for a thread, or a fresh empty state if the thread is
    /// unknown.
    async fn load(&self, thread: &ThreadId) -> Result<ConversationState, Self::Error>;

    /// Durably replace the state for a thread.
    async fn save(&self, thread: &ThreadId, state: &ConversationState)
        -> Result<(), Self::Error>;
}
