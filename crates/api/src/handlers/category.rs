//! Handlers for the skill category taxonomy.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skilltrack_core::categorization::validate_category_name;
use skilltrack_core::error::CoreError;
use skilltrack_core::types::DbId;
use skilltrack_db::models::skill_category::CreateSkillCategory;
use skilltrack_db::repositories::SkillCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = SkillCategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateSkillCategory>,
) -> AppResult<impl IntoResponse> {
    validate_category_name(&input.name)?;

    let category = SkillCategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Skill category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !SkillCategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SkillCategory",
            id,
        }));
    }

    tracing::info!(category_id = id, "Skill category deleted");

    Ok(StatusCode::NO_CONTENT)
}
