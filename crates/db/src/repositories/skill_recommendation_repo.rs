//! Repository for the `skill_recommendations` table.

use sqlx::PgPool;
use skilltrack_core::types::DbId;

use crate::models::skill_recommendation::{RecommendedSkill, SkillRecommendation};

/// Column list for skill_recommendations queries.
const COLUMNS: &str =
    "id, skill_id, recommended_skill_id, similarity_score, created_at, updated_at";

pub struct SkillRecommendationRepo;

impl SkillRecommendationRepo {
    /// Insert or refresh the score for a `(skill, recommended_skill)` pair.
    ///
    /// Uses `ON CONFLICT (skill_id, recommended_skill_id) DO UPDATE` to keep
    /// one row per ordered pair.
    pub async fn upsert(
        pool: &PgPool,
        skill_id: DbId,
        recommended_skill_id: DbId,
        similarity_score: f64,
    ) -> Result<SkillRecommendation, sqlx::Error> {
        let query = format!(
            "INSERT INTO skill_recommendations (skill_id, recommended_skill_id, similarity_score) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (skill_id, recommended_skill_id) DO UPDATE \
             SET similarity_score = EXCLUDED.similarity_score \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillRecommendation>(&query)
            .bind(skill_id)
            .bind(recommended_skill_id)
            .bind(similarity_score)
            .fetch_one(pool)
            .await
    }

    /// Stored recommendations for a skill, highest similarity first.
    pub async fn list_for_skill(
        pool: &PgPool,
        skill_id: DbId,
    ) -> Result<Vec<RecommendedSkill>, sqlx::Error> {
        sqlx::query_as::<_, RecommendedSkill>(
            "SELECT s.id, s.name, r.similarity_score AS similarity
             FROM skill_recommendations r
             JOIN skills s ON s.id = r.recommended_skill_id
             WHERE r.skill_id = $1
             ORDER BY r.similarity_score DESC, s.id ASC",
        )
        .bind(skill_id)
        .fetch_all(pool)
        .await
    }

    /// Number of stored rows for a skill.
    pub async fn count_for_skill(pool: &PgPool, skill_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM skill_recommendations WHERE skill_id = $1")
                .bind(skill_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
