//! Handlers for the insight endpoints: recommendations, note summaries,
//! mastery prediction, and auto-categorization.
//!
//! Each handler loads the skill (404 if missing), runs one computation or
//! model call, persists the result where applicable, and returns it.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use skilltrack_core::categorization::categorization_text;
use skilltrack_core::mastery::{
    predict_mastery, ProgressPoint, DEFAULT_HOURS_PER_WEEK, INSUFFICIENT_DATA_MESSAGE,
};
use skilltrack_core::recommendation::{
    recommend_similar, validate_limit, SkillDocument, DEFAULT_MAX_RECOMMENDATIONS,
};
use skilltrack_core::summarization::{
    needs_summarization, notes_text, SUMMARY_MAX_LENGTH, SUMMARY_MIN_LENGTH,
};
use skilltrack_core::types::{Date, DbId};
use skilltrack_db::models::mastery_prediction::CreateMasteryPrediction;
use skilltrack_db::models::skill_recommendation::RecommendedSkill;
use skilltrack_db::repositories::{
    LearningProgressRepo, MasteryPredictionRepo, NoteSummaryRepo, SkillCategoryRepo,
    SkillRecommendationRepo, SkillRepo,
};

use crate::error::AppResult;
use crate::handlers::skill::find_skill;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Either a prediction or an explanation of why none was made.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MasteryResponse {
    Predicted {
        predicted_date: Date,
        confidence: f64,
    },
    Insufficient {
        message: &'static str,
    },
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: String,
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /ml/{id}/recommend-skills?limit=
///
/// Rank every other skill by TF-IDF cosine similarity, upsert the top
/// results, and return them.
pub async fn recommend_skills(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    find_skill(&state.pool, id).await?;
    let limit = params.limit.unwrap_or(DEFAULT_MAX_RECOMMENDATIONS);
    validate_limit(limit)?;

    let skills = SkillRepo::list_all(&state.pool).await?;
    let corpus: Vec<SkillDocument> = skills
        .iter()
        .map(|s| SkillDocument::from_fields(s.id, &s.name, &s.description, &s.notes))
        .collect();
    let names: HashMap<DbId, &str> = skills.iter().map(|s| (s.id, s.name.as_str())).collect();

    let ranked = recommend_similar(id, &corpus, limit)?;

    let mut results = Vec::with_capacity(ranked.len());
    for scored in ranked {
        SkillRecommendationRepo::upsert(&state.pool, id, scored.skill_id, scored.similarity)
            .await?;
        results.push(RecommendedSkill {
            id: scored.skill_id,
            name: names.get(&scored.skill_id).copied().unwrap_or_default().to_string(),
            similarity: scored.similarity,
        });
    }

    tracing::info!(
        skill_id = id,
        corpus_size = corpus.len(),
        recommended = results.len(),
        "Skill recommendations computed"
    );

    Ok(Json(DataResponse { data: results }))
}

/// GET /ml/{id}/summarize-notes
///
/// Summarize the skill's description and notes. Short text is returned
/// unchanged without a model call. Every result is appended to history.
pub async fn summarize_notes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let skill = find_skill(&state.pool, id).await?;
    let text = notes_text(&skill.description, &skill.notes);

    let summary = if needs_summarization(&text, SUMMARY_MIN_LENGTH) {
        state
            .summarizer
            .summarize(&text, SUMMARY_MAX_LENGTH, SUMMARY_MIN_LENGTH)
            .await?
    } else {
        text
    };

    let stored = NoteSummaryRepo::create(&state.pool, id, &summary).await?;

    tracing::info!(skill_id = id, summary_id = stored.id, "Note summary stored");

    Ok(Json(DataResponse {
        data: SummaryResponse { summary },
    }))
}

/// GET /ml/{id}/predict-mastery
///
/// Extrapolate cumulative logged hours to the mastery target. Stores the
/// prediction when one can be made.
pub async fn predict_mastery_date(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_skill(&state.pool, id).await?;

    let entries = LearningProgressRepo::list(&state.pool, Some(id)).await?;
    let points: Vec<ProgressPoint> = entries
        .iter()
        .map(|e| ProgressPoint {
            date: e.date,
            hours: e.hours_spent,
        })
        .collect();

    let today = chrono::Utc::now().date_naive();
    let response = match predict_mastery(&points, today) {
        Some(prediction) => {
            MasteryPredictionRepo::create(
                &state.pool,
                &CreateMasteryPrediction {
                    skill_id: id,
                    predicted_date: prediction.predicted_date,
                    confidence_score: prediction.confidence,
                    hours_per_week: DEFAULT_HOURS_PER_WEEK,
                },
            )
            .await?;

            tracing::info!(
                skill_id = id,
                predicted_date = %prediction.predicted_date,
                confidence = prediction.confidence,
                "Mastery prediction stored"
            );

            MasteryResponse::Predicted {
                predicted_date: prediction.predicted_date,
                confidence: prediction.confidence,
            }
        }
        None => {
            tracing::debug!(skill_id = id, entries = entries.len(), "No mastery trend");
            MasteryResponse::Insufficient {
                message: INSUFFICIENT_DATA_MESSAGE,
            }
        }
    };

    Ok(Json(DataResponse { data: response }))
}

/// GET /ml/{id}/auto-categorize
///
/// Classify the skill against the category taxonomy, seeding the default
/// categories first if none exist.
pub async fn auto_categorize(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let skill = find_skill(&state.pool, id).await?;

    let mut labels = SkillCategoryRepo::list_names(&state.pool).await?;
    if labels.is_empty() {
        SkillCategoryRepo::seed_defaults(&state.pool).await?;
        labels = SkillCategoryRepo::list_names(&state.pool).await?;
    }

    let text = categorization_text(&skill.name, &skill.description);
    let classification = state.classifier.classify(&text, &labels).await?;

    tracing::info!(
        skill_id = id,
        category = %classification.label,
        confidence = classification.score,
        "Skill categorized"
    );

    Ok(Json(DataResponse {
        data: CategoryResponse {
            category: classification.label,
            confidence: classification.score,
        },
    }))
}
