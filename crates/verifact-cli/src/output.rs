//! Output formatting for the CLI.

use colored::*;
use verifact_domain::Source;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a fact-check result: the verdict plus its source lines.
    pub fn format_outcome(&self, verdict: &str, sources: &[Source]) -> String {
        let mut out = String::new();
        out.push_str(&self.colorize("Fact-Check Result:", "green"));
        out.push('\n');
        out.push_str(verdict);

        if !sources.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.colorize("Sources:", "blue"));
            for source in sources {
                out.push('\n');
                out.push_str(&format!("- {}: {}", source.title, source.url));
            }
        }

        out
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn colorize(&self, message: &str, color: &str) -> String {
        if !self.color_enabled {
            return message.to_string();
        }

        match color {
            "green" => message.green().to_string(),
            "red" => message.red().to_string(),
            "blue" => message.blue().to_string(),
            "yellow" => message.yellow().to_string(),
            _ => message.to_string(),
        }
    }
}
