//! Repository for the `learning_progress` table.

use sqlx::PgPool;
use skilltrack_core::types::DbId;

use crate::models::learning_progress::{
    CreateLearningProgress, LearningProgress, UpdateLearningProgress,
};

/// Column list for learning_progress queries.
const COLUMNS: &str = "id, skill_id, date, hours_spent, notes, created_at, updated_at";

/// Provides CRUD operations for progress log entries. Listings are ordered
/// by date descending.
pub struct LearningProgressRepo;

impl LearningProgressRepo {
    /// List entries, optionally restricted to one skill.
    pub async fn list(
        pool: &PgPool,
        skill_id: Option<DbId>,
    ) -> Result<Vec<LearningProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM learning_progress
             WHERE ($1::BIGINT IS NULL OR skill_id = $1)
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, LearningProgress>(&query)
            .bind(skill_id)
            .fetch_all(pool)
            .await
    }

    /// List entries belonging to any of the given skills.
    pub async fn list_for_skills(
        pool: &PgPool,
        skill_ids: &[DbId],
    ) -> Result<Vec<LearningProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM learning_progress
             WHERE skill_id = ANY($1)
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, LearningProgress>(&query)
            .bind(skill_ids)
            .fetch_all(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LearningProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM learning_progress WHERE id = $1");
        sqlx::query_as::<_, LearningProgress>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Log a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLearningProgress,
    ) -> Result<LearningProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO learning_progress (skill_id, date, hours_spent, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LearningProgress>(&query)
            .bind(input.skill_id)
            .bind(input.date)
            .bind(input.hours_spent)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Update an entry by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLearningProgress,
    ) -> Result<Option<LearningProgress>, sqlx::Error> {
        let query = format!(
            "UPDATE learning_progress SET
                date = COALESCE($2, date),
                hours_spent = COALESCE($3, hours_spent),
                notes = COALESCE($4, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LearningProgress>(&query)
            .bind(id)
            .bind(input.date)
            .bind(input.hours_spent)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM learning_progress WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
