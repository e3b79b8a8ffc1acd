//! Thread identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier scoping one persistent conversation.
///
/// A thread owns exactly one [`crate::ConversationState`] in the checkpoint
/// store. Threads are created implicitly on first use and never explicitly
/// destroyed by the core; lifecycle management is a caller concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(String);

impl ThreadId {
    /// Create a thread identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ThreadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_id_equality_and_display() {
        let a = ThreadId::new("factcheck-1");
        let b = ThreadId::from("factcheck-1");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "factcheck-1");
        assert_eq!(a.as_str(), "factcheck-1");
    }

    #[test]
    fn test_distinct_threads_differ() {
        assert_ne!(ThreadId::new("a"), ThreadId::new("b"));
    }
}
