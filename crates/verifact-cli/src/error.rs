//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration or credential error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Workflow engine error
    #[error(transparent)]
    Workflow(#[from] verifact_engine::WorkflowError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Readline error: {0}")]
    Readline(String),
}
