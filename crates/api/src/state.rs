use std::sync::Arc;

use skilltrack_inference::{Summarizer, ZeroShotClassifier};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: skilltrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Note summarization model.
    pub summarizer: Arc<dyn Summarizer>,
    /// Zero-shot classification model used for auto-categorization.
    pub classifier: Arc<dyn ZeroShotClassifier>,
}
