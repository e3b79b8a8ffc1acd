//! Verifact CLI - conversational fact-checking from the terminal.
//!
//! Wires the workflow engine to the Tavily search provider and the Gemini
//! completion provider, with conversation state checkpointed in memory for
//! the lifetime of the process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{CheckArgs, Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
