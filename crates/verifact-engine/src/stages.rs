//! Pure stage transformations
//!
//! Each function here transforms conversation state without performing I/O;
//! the workflow drives provider calls and feeds the responses in. Keeping the
//! transforms pure makes the state invariants directly testable.

use crate::error::WorkflowError;
use verifact_domain::{ConversationState, SearchResult, Source, MAX_SOURCES};

/// Claim stage: set `claim` to the content of the most recent message.
///
/// Idempotent; fails only if the conversation has no messages, which is a
/// caller error since the workflow appends the incoming user message first.
pub fn apply_claim(state: &mut ConversationState) -> Result<(), WorkflowError> {
    let claim = state
        .last_content()
        .ok_or(WorkflowError::EmptyConversation)?
        .to_string();
    state.claim = claim;
    Ok(())
}

/// Search stage: derive `evidence` and `sources` from provider results.
///
/// `evidence` is the newline-joined content of every result with non-empty
/// content, in provider order. `sources` is the first [`MAX_SOURCES`] results'
/// title/url pairs, in provider order; empty-content entries are dropped from
/// the evidence but still count as sources. Zero results is not an error: the
/// pipeline proceeds with empty evidence.
pub fn apply_search(state: &mut ConversationState, results: &[SearchResult]) {
    state.evidence = results
        .iter()
        .filter_map(|r| r.content.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    state.sources = results
        .iter()
        .take(MAX_SOURCES)
        .map(|r| Source::new(&r.title, &r.url))
        .collect();
}

/// Verdict stage effect: record the verdict and append it to the history as
/// an assistant message. Leaves `sources` untouched.
pub fn apply_verdict(state: &mut ConversationState, verdict: String) {
    state.verdict = verdict.clone();
    state.push_assistant(verdict);
}
