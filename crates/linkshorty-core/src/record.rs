use serde::{Deserialize, Serialize};

/// A stored URL mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    ///
    /// Held verbatim: the core neither validates nor normalizes URLs, and
    /// the empty string is a legal value.
    pub original_url: String,
}

impl UrlRecord {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}
