//! Conversation state - the record threaded through one fact-check turn

use crate::message::Message;
use crate::source::Source;
use serde::{Deserialize, Serialize};

/// The full state of one conversation thread.
///
/// `messages` accumulates across turns and is append-only: the engine never
/// reorders or deletes existing entries. The remaining fields are overwritten
/// every turn and always reflect the latest turn only; past verdicts survive
/// only as assistant entries in `messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Chronological conversation history
    #[serde(default)]
    pub messages: Vec<Message>,

    /// The claim currently under verification
    #[serde(default)]
    pub claim: String,

    /// Newline-joined evidence text gathered for the current claim
    #[serde(default)]
    pub evidence: String,

    /// The completion provider's judgment for the current claim
    #[serde(default)]
    pub verdict: String,

    /// Citations for the current verdict (at most [`crate::MAX_SOURCES`])
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl ConversationState {
    /// Create an empty state for a fresh thread.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message to the history.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append an assistant message to the history.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Content of the most recent message, if any.
    pub fn last_content(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }

    /// Number of user/assistant exchanges recorded so far.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
