//! Verifact Workflow Engine
//!
//! The deterministic three-stage pipeline at the heart of the fact-checker:
//!
//! 1. **Claim stage** - capture the claim from the latest user message
//! 2. **Search stage** - gather evidence and sources from the search provider
//! 3. **Verdict stage** - ask the completion provider for a grounded verdict
//!
//! One call to [`Workflow::run`] executes one conversation turn: prior state
//! is loaded from the checkpoint store, the stages transform a working copy,
//! and the result is saved back only if every stage succeeded. A failed turn
//! leaves the stored conversation exactly as it was, including the attempted
//! user message.
//!
//! Stage order is data, not control flow: an explicit transition table maps
//! each stage to its successor and is validated at engine construction to be
//! a single linear chain.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod graph;
pub mod prompt;
pub mod stages;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use config::WorkflowConfig;
pub use error::WorkflowError;
pub use graph::Stage;
pub use workflow::{TurnOutcome, Workflow};
