//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional result cap (`?limit=`) for the recommendation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}
