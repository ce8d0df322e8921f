//! Shared search request/response shapes.

use serde::{Deserialize, Serialize};

/// Query parameters for name search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Substring to match, case-insensitively. An empty term matches all.
    #[serde(default)]
    pub term: String,
}

/// Search response: matched rows plus their count.
///
/// There is no pagination, so `count` always equals `data.len()`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T: Serialize> {
    pub count: i64,
    pub data: Vec<T>,
}
