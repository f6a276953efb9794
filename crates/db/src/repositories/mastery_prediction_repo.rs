//! Repository for the `skill_mastery_predictions` table.

use sqlx::PgPool;
use skilltrack_core::types::DbId;

use crate::models::mastery_prediction::{CreateMasteryPrediction, SkillMasteryPrediction};

const COLUMNS: &str =
    "id, skill_id, predicted_date, confidence_score, hours_per_week, created_at, updated_at";

pub struct MasteryPredictionRepo;

impl MasteryPredictionRepo {
    /// Append a prediction for a skill.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMasteryPrediction,
    ) -> Result<SkillMasteryPrediction, sqlx::Error> {
        let query = format!(
            "INSERT INTO skill_mastery_predictions
                (skill_id, predicted_date, confidence_score, hours_per_week)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillMasteryPrediction>(&query)
            .bind(input.skill_id)
            .bind(input.predicted_date)
            .bind(input.confidence_score)
            .bind(input.hours_per_week)
            .fetch_one(pool)
            .await
    }

    /// Prediction history for a skill, earliest predicted date first.
    pub async fn list_for_skill(
        pool: &PgPool,
        skill_id: DbId,
    ) -> Result<Vec<SkillMasteryPrediction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skill_mastery_predictions
             WHERE skill_id = $1
             ORDER BY predicted_date ASC, id ASC"
        );
        sqlx::query_as::<_, SkillMasteryPrediction>(&query)
            .bind(skill_id)
            .fetch_all(pool)
            .await
    }
}
