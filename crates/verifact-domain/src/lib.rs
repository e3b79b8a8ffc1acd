//! Verifact Domain Layer
//!
//! This crate contains the core data model for the fact-checking workflow and
//! defines the trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Conversation State**: the record threaded through one fact-check turn -
//!   accumulated messages plus the latest claim, evidence, verdict and sources
//! - **Thread**: an opaque identifier scoping one persistent conversation
//! - **Source**: a `{title, url}` citation, at most three per turn
//!
//! ## Architecture
//!
//! Infrastructure implementations live in other crates:
//! - `verifact-store` implements [`traits::CheckpointStore`]
//! - `verifact-providers` implements [`traits::SearchProvider`] and
//!   [`traits::CompletionProvider`]
//! - `verifact-engine` consumes all three seams

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod message;
pub mod source;
pub mod state;
pub mod thread;
pub mod traits;

// Re-exports for convenience
pub use message::{Message, Role};
pub use source::{Source, MAX_SOURCES};
pub use state::ConversationState;
pub use thread::ThreadId;
pub use traits::SearchResult;
