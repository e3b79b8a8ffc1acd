//! Workflow engine configuration

use std::time::Duration;
use verifact_domain::MAX_SOURCES;

/// Tunable settings for the workflow engine.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Maximum number of results requested from the search provider
    pub max_results: usize,

    /// Timeout applied to each provider call, in seconds
    pub stage_timeout_secs: u64,
}

impl WorkflowConfig {
    /// Stage timeout as a `Duration`.
    pub fn stage_timeout(&self) -> Duration {
        Duration::from_secs(self.stage_timeout_secs)
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_SOURCES,
            stage_timeout_secs: 60,
        }
    }
}
