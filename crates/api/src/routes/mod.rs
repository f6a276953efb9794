pub mod category;
pub mod health;
pub mod ml;
pub mod progress;
pub mod skill;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /skills                                  list, create
/// /skills/statistics                       aggregate counts and hours
/// /skills/{id}                             get, update, delete
/// /skills/{id}/progress                    progress entries of one skill
/// /skills/{id}/recommendations             stored recommendations
/// /skills/{id}/summaries                   summary history
/// /skills/{id}/mastery-predictions         prediction history
///
/// /progress                                list (?skill_id), create
/// /progress/{id}                           get, update, delete
///
/// /categories                              list, create
/// /categories/{id}                         delete
///
/// /ml/{id}/recommend-skills                recompute recommendations (?limit)
/// /ml/{id}/summarize-notes                 summarize description and notes
/// /ml/{id}/predict-mastery                 predict the mastery date
/// /ml/{id}/auto-categorize                 zero-shot categorization
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/skills", skill::router())
        .nest("/progress", progress::router())
        .nest("/categories", category::router())
        .nest("/ml", ml::router())
}
