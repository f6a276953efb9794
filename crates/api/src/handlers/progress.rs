//! Handlers for learning progress log entries.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skilltrack_core::error::CoreError;
use skilltrack_core::progress::validate_entry_hours;
use skilltrack_core::types::DbId;
use skilltrack_db::models::learning_progress::{
    CreateLearningProgress, ProgressFilter, UpdateLearningProgress,
};
use skilltrack_db::repositories::LearningProgressRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::skill::ensure_skill_exists;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "LearningProgress",
        id,
    })
}

/// GET /progress?skill_id=
pub async fn list_progress(
    State(state): State<AppState>,
    Query(filter): Query<ProgressFilter>,
) -> AppResult<impl IntoResponse> {
    let entries = LearningProgressRepo::list(&state.pool, filter.skill_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /progress
///
/// Log a session against an existing skill.
pub async fn create_progress(
    State(state): State<AppState>,
    Json(input): Json<CreateLearningProgress>,
) -> AppResult<impl IntoResponse> {
    validate_entry_hours(input.hours_spent)?;
    ensure_skill_exists(&state.pool, input.skill_id).await?;

    let entry = LearningProgressRepo::create(&state.pool, &input).await?;

    tracing::info!(
        progress_id = entry.id,
        skill_id = entry.skill_id,
        hours = entry.hours_spent,
        "Progress logged"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /progress/{id}
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = LearningProgressRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: entry }))
}

/// PUT /progress/{id}
pub async fn update_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLearningProgress>,
) -> AppResult<impl IntoResponse> {
    if let Some(hours) = input.hours_spent {
        validate_entry_hours(hours)?;
    }

    let entry = LearningProgressRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(progress_id = id, "Progress entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /progress/{id}
pub async fn delete_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !LearningProgressRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(progress_id = id, "Progress entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
