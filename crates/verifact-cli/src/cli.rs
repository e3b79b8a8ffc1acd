//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Verifact - fact-check claims against live web evidence.
#[derive(Debug, Parser)]
#[command(name = "verifact")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Conversation thread identifier (defaults to a fresh session id)
    #[arg(short, long, global = true)]
    pub thread: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.verifact/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fact-check a single claim and exit
    Check(CheckArgs),

    /// Enter the interactive fact-checking loop (default)
    Repl,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// The claim to verify
    #[arg(required = true, num_args = 1..)]
    pub claim: Vec<String>,
}

impl CheckArgs {
    /// The claim words joined back into one statement.
    pub fn claim_text(&self) -> String {
        self.claim.join(" ")
    }
}
