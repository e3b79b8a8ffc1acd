//! Stage machine definition
//!
//! The pipeline is a fixed linear chain with no cycles, branches or retry
//! edges. The chain is expressed as a static transition table so the shape is
//! inspectable data, and [`validate_chain`] confirms at engine construction
//! that the table still describes a single linear walk from `Start` to `End`.

use crate::error::WorkflowError;
use std::fmt;

/// A stage of the fact-checking pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Entry marker; performs no work
    Start,
    /// Capture the claim from the latest user message
    Claim,
    /// Gather evidence and sources from the search provider
    Search,
    /// Produce the verdict via the completion provider
    Verdict,
    /// Terminal marker; performs no work
    End,
}

/// The transition table: each stage and its successor.
const TRANSITIONS: &[(Stage, Stage)] = &[
    (Stage::Start, Stage::Claim),
    (Stage::Claim, Stage::Search),
    (Stage::Search, Stage::Verdict),
    (Stage::Verdict, Stage::End),
];

impl Stage {
    /// The successor of this stage, or `None` for `End`.
    pub fn next(self) -> Option<Stage> {
        TRANSITIONS
            .iter()
            .find(|(from, _)| *from == self)
            .map(|(_, to)| *to)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Start => write!(f, "start"),
            Stage::Claim => write!(f, "claim"),
            Stage::Search => write!(f, "search"),
            Stage::Verdict => write!(f, "verdict"),
            Stage::End => write!(f, "end"),
        }
    }
}

/// Verify that the transition table is a single linear chain from `Start`
/// to `End` with no cycles and no unreachable entries.
pub fn validate_chain() -> Result<(), WorkflowError> {
    let mut visited = vec![Stage::Start];
    let mut stage = Stage::Start;

    while let Some(next) = stage.next() {
        if visited.contains(&next) {
            return Err(WorkflowError::InvalidChain(format!(
                "cycle detected at stage '{}'",
                next
            )));
        }
        visited.push(next);
        stage = next;
    }

    if stage != Stage::End {
        return Err(WorkflowError::InvalidChain(format!(
            "chain terminates at '{}' instead of 'end'",
            stage
        )));
    }
    if visited.len() != TRANSITIONS.len() + 1 {
        return Err(WorkflowError::InvalidChain(
            "transition table contains unreachable stages".to_string(),
        ));
    }

    Ok(())
}
