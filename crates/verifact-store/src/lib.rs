//! Verifact Checkpoint Storage
//!
//! Implements the `CheckpointStore` trait over an in-process keyed blob store.
//!
//! # Architecture
//!
//! Conversation states are serialized to JSON and kept in a map keyed by
//! thread identifier. The store never interprets field contents - it is an
//! opaque blob store over the conversation shape, so any backing that
//! preserves field names and types could replace it behind the same trait.
//!
//! # Examples
//!
//! ```
//! use verifact_store::MemorySaver;
//! use verifact_domain::traits::CheckpointStore;
//! use verifact_domain::{ConversationState, ThreadId};
//!
//! # tokio_test::block_on(async {
//! let store = MemorySaver::new();
//! let thread = ThreadId::new("factcheck-1");
//!
//! // Unknown threads load as fresh empty state
//! let state = store.load(&thread).await.unwrap();
//! assert!(state.messages.is_empty());
//! # });
//! ```

#![warn(missing_docs)]

use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use verifact_domain::traits::CheckpointStore;
use verifact_domain::{ConversationState, ThreadId};

/// Errors that can occur during checkpoint operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// State could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// In-memory implementation of `CheckpointStore`.
///
/// Retention is unbounded: threads are created implicitly on first `save` and
/// never evicted. `save` replaces a thread's blob in one step under a write
/// lock, so a concurrent `load` on the same thread sees either the previous
/// or the new state, never a partial write.
#[derive(Debug, Default)]
pub struct MemorySaver {
    threads: RwLock<HashMap<ThreadId, String>>,
}

impl MemorySaver {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of threads with a saved checkpoint (for tests and diagnostics).
    pub async fn thread_count(&self) -> usize {
        self.threads.read().await.len()
    }
}

#[async_trait::async_trait]
impl CheckpointStore for MemorySaver {
    type Error = StoreError;

    async fn load(&self, thread: &ThreadId) -> Result<ConversationState, Self::Error> {
        let threads = self.threads.read().await;
        match threads.get(thread) {
            Some(blob) => Ok(serde_json::from_str(blob)?),
            None => Ok(ConversationState::new()),
        }
    }

    async fn save(
        &self,
        thread: &ThreadId,
        state: &ConversationState,
    ) -> Result<(), Self::Error> {
        // Serialize before taking the lock; the critical section is just the
        // map insert.
        let blob = serde_json::to_string(state)?;
        let mut threads = self.threads.write().await;
        threads.insert(thread.clone(), blob);
        Ok(())
    }
}
