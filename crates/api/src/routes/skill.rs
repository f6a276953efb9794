//! Route definitions for skills.

use axum::routing::get;
use axum::Router;

use crate::handlers::skill;
use crate::state::AppState;

/// Skill routes, mounted at `/skills`.
///
/// ```text
/// GET    /                        -> list_skills (?progress_status, resource_type)
/// POST   /                        -> create_skill
/// GET    /statistics              -> skill_statistics
/// GET    /{id}                    -> get_skill
/// PUT    /{id}                    -> update_skill
/// DELETE /{id}                    -> delete_skill
/// GET    /{id}/progress           -> list_skill_progress
/// GET    /{id}/recommendations    -> list_recommendations
/// GET    /{id}/summaries          -> list_summaries
/// GET    /{id}/mastery-predictions -> list_mastery_predictions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skill::list_skills).post(skill::create_skill))
        .route("/statistics", get(skill::skill_statistics))
        .route(
            "/{id}",
            get(skill::get_skill)
                .put(skill::update_skill)
                .delete(skill::delete_skill),
        )
        .route("/{id}/progress", get(skill::list_skill_progress))
        .route("/{id}/recommendations", get(skill::list_recommendations))
        .route("/{id}/summaries", get(skill::list_summaries))
        .route(
            "/{id}/mastery-predictions",
            get(skill::list_mastery_predictions),
        )
}
