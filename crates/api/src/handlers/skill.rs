//! Handlers for skills: CRUD, statistics, and per-skill history listings.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skilltrack_core::error::CoreError;
use skilltrack_core::skill::{
    validate_difficulty, validate_platform, validate_progress_status, validate_resource_type,
    validate_skill_hours, validate_skill_name, validate_url,
};
use skilltrack_core::types::DbId;
use skilltrack_db::models::learning_progress::LearningProgress;
use skilltrack_db::models::skill::{CreateSkill, Skill, SkillDetail, SkillFilter, UpdateSkill};
use skilltrack_db::repositories::{
    LearningProgressRepo, MasteryPredictionRepo, NoteSummaryRepo, SkillRecommendationRepo,
    SkillRepo,
};
use skilltrack_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Load a skill or fail with 404.
pub(crate) async fn find_skill(pool: &DbPool, id: DbId) -> AppResult<Skill> {
    SkillRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))
}

/// Fail with 404 unless the skill exists.
pub(crate) async fn ensure_skill_exists(pool: &DbPool, id: DbId) -> AppResult<()> {
    if SkillRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }))
    }
}

fn validate_create(input: &CreateSkill) -> Result<(), CoreError> {
    validate_skill_name(&input.name)?;
    validate_resource_type(&input.resource_type)?;
    validate_platform(&input.platform)?;
    validate_url(&input.url)?;
    if let Some(ref status) = input.progress_status {
        validate_progress_status(status)?;
    }
    if let Some(hours) = input.hours_spent {
        validate_skill_hours(hours)?;
    }
    if let Some(rating) = input.difficulty_rating {
        validate_difficulty(rating)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateSkill) -> Result<(), CoreError> {
    if let Some(ref name) = input.name {
        validate_skill_name(name)?;
    }
    if let Some(ref resource_type) = input.resource_type {
        validate_resource_type(resource_type)?;
    }
    if let Some(ref platform) = input.platform {
        validate_platform(platform)?;
    }
    if let Some(ref url) = input.url {
        validate_url(url)?;
    }
    if let Some(ref status) = input.progress_status {
        validate_progress_status(status)?;
    }
    if let Some(hours) = input.hours_spent {
        validate_skill_hours(hours)?;
    }
    if let Some(rating) = input.difficulty_rating {
        validate_difficulty(rating)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /skills?progress_status=&resource_type=
///
/// List skills with their progress entries and total logged hours.
pub async fn list_skills(
    State(state): State<AppState>,
    Query(filter): Query<SkillFilter>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = filter.progress_status {
        validate_progress_status(status)?;
    }
    if let Some(ref resource_type) = filter.resource_type {
        validate_resource_type(resource_type)?;
    }

    let skills = SkillRepo::list(&state.pool, &filter).await?;
    let ids: Vec<DbId> = skills.iter().map(|s| s.id).collect();
    let entries = LearningProgressRepo::list_for_skills(&state.pool, &ids).await?;

    let mut by_skill: HashMap<DbId, Vec<LearningProgress>> = HashMap::new();
    for entry in entries {
        by_skill.entry(entry.skill_id).or_default().push(entry);
    }

    let details: Vec<SkillDetail> = skills
        .into_iter()
        .map(|skill| {
            let own = by_skill.remove(&skill.id).unwrap_or_default();
            SkillDetail::new(skill, own)
        })
        .collect();

    Ok(Json(DataResponse { data: details }))
}

/// POST /skills
pub async fn create_skill(
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let skill = SkillRepo::create(&state.pool, &input).await?;

    tracing::info!(
        skill_id = skill.id,
        resource_type = %skill.resource_type,
        "Skill created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// GET /skills/{id}
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let skill = find_skill(&state.pool, id).await?;
    let entries = LearningProgressRepo::list(&state.pool, Some(id)).await?;

    Ok(Json(DataResponse {
        data: SkillDetail::new(skill, entries),
    }))
}

/// PUT /skills/{id}
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;

    tracing::info!(skill_id = id, "Skill updated");

    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /skills/{id}
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !SkillRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }));
    }

    tracing::info!(skill_id = id, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /skills/statistics
pub async fn skill_statistics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = SkillRepo::statistics(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

// ---------------------------------------------------------------------------
// Per-skill history
// ---------------------------------------------------------------------------

/// GET /skills/{id}/progress
pub async fn list_skill_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_skill_exists(&state.pool, id).await?;
    let entries = LearningProgressRepo::list(&state.pool, Some(id)).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /skills/{id}/recommendations
///
/// Recommendations stored by the last recompute, highest similarity first.
pub async fn list_recommendations(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_skill_exists(&state.pool, id).await?;
    let recommendations = SkillRecommendationRepo::list_for_skill(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: recommendations,
    }))
}

/// GET /skills/{id}/summaries
pub async fn list_summaries(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_skill_exists(&state.pool, id).await?;
    let summaries = NoteSummaryRepo::list_for_skill(&state.pool, id).await?;
    Ok(Json(DataResponse { data: summaries }))
}

/// GET /skills/{id}/mastery-predictions
pub async fn list_mastery_predictions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_skill_exists(&state.pool, id).await?;
    let predictions = MasteryPredictionRepo::list_for_skill(&state.pool, id).await?;
    Ok(Json(DataResponse { data: predictions }))
}
