use axum::routing::get;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Learning progress routes, mounted at `/progress`.
///
/// ```text
/// GET    /        -> list_progress (?skill_id)
/// POST   /        -> create_progress
/// GET    /{id}    -> get_progress
/// PUT    /{id}    -> update_progress
/// DELETE /{id}    -> delete_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(progress::list_progress).post(progress::create_progress),
        )
        .route(
            "/{id}",
            get(progress::get_progress)
                .put(progress::update_progress)
                .delete(progress::delete_progress),
        )
}
