//! Route definitions for computed insights.
//!
//! All four are GET endpoints that also persist their result, so repeated
//! calls append history (summaries, predictions) or refresh it
//! (recommendations).

use axum::routing::get;
use axum::Router;

use crate::handlers::ml;
use crate::state::AppState;

/// Insight routes, mounted at `/ml`.
///
/// ```text
/// GET /{id}/recommend-skills   -> recommend_skills (?limit)
/// GET /{id}/summarize-notes    -> summarize_notes
/// GET /{id}/predict-mastery    -> predict_mastery_date
/// GET /{id}/auto-categorize    -> auto_categorize
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/recommend-skills", get(ml::recommend_skills))
        .route("/{id}/summarize-notes", get(ml::summarize_notes))
        .route("/{id}/predict-mastery", get(ml::predict_mastery_date))
        .route("/{id}/auto-categorize", get(ml::auto_categorize))
}
