//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// List parameters (`?limit=`). Clamped via `clamp_limit` before hitting storage.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}
