//! Citation sources attached to a verdict

use serde::{Deserialize, Serialize};

/// Maximum number of sources retained per turn.
///
/// Sources are drawn from the first `MAX_SOURCES` search results in
/// provider-returned order.
pub const MAX_SOURCES: usize = 3;

/// A citation backing a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Page title as reported by the search provider
    pub title: String,

    /// Page URL
    pub url: String,
}

impl Source {
    /// Create a new source.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
