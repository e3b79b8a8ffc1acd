//! Error types for the workflow engine

use thiserror::Error;

/// Errors that can occur while running a turn
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The conversation had no messages when the claim stage ran
    #[error("Conversation has no messages; nothing to fact-check")]
    EmptyConversation,

    /// The search provider call failed
    #[error("Search provider error: {0}")]
    Search(String),

    /// The completion provider call failed
    #[error("Completion provider error: {0}")]
    Completion(String),

    /// The checkpoint store failed to load or save state
    #[error("Checkpoint store error: {0}")]
    Store(String),

    /// A provider call exceeded the configured stage timeout
    #[error("Timed out in the {0} stage")]
    Timeout(&'static str),

    /// The stage transition table is not a single linear chain
    #[error("Invalid stage chain: {0}")]
    InvalidChain(String),
}
