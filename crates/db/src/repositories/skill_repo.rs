//! Repository for the `skills` table.

use sqlx::PgPool;
use skilltrack_core::skill::{DEFAULT_DIFFICULTY, STATUS_NOT_STARTED};
use skilltrack_core::types::DbId;

use crate::models::skill::{
    CreateSkill, ResourceTypeCount, Skill, SkillFilter, SkillStatistics, UpdateSkill,
};

/// Column list for skills queries.
const COLUMNS: &str = "id, name, description, resource_type, platform, url, \
    progress_status, hours_spent, difficulty_rating, notes, created_at, updated_at";

/// Provides CRUD operations and aggregates for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// List skills, newest first, optionally filtered by status and type.
    pub async fn list(pool: &PgPool, filter: &SkillFilter) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE ($1::TEXT IS NULL OR progress_status = $1)
               AND ($2::TEXT IS NULL OR resource_type = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&filter.progress_status)
            .bind(&filter.resource_type)
            .fetch_all(pool)
            .await
    }

    /// Every skill ordered by ID. Used to build the recommendation corpus.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY id ASC");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Find a skill by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a skill with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM skills WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Create a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills
                (name, description, resource_type, platform, url,
                 progress_status, hours_spent, difficulty_rating, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.resource_type)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(input.progress_status.as_deref().unwrap_or(STATUS_NOT_STARTED))
            .bind(input.hours_spent.unwrap_or(0.0))
            .bind(input.difficulty_rating.unwrap_or(DEFAULT_DIFFICULTY))
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Update a skill by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                resource_type = COALESCE($4, resource_type),
                platform = COALESCE($5, platform),
                url = COALESCE($6, url),
                progress_status = COALESCE($7, progress_status),
                hours_spent = COALESCE($8, hours_spent),
                difficulty_rating = COALESCE($9, difficulty_rating),
                notes = COALESCE($10, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.resource_type)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.progress_status)
            .bind(input.hours_spent)
            .bind(input.difficulty_rating)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill by ID. Returns `true` if a row was deleted.
    ///
    /// Progress entries, recommendations, summaries and predictions cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Counts, hour totals and the per-type breakdown across all skills.
    pub async fn statistics(pool: &PgPool) -> Result<SkillStatistics, sqlx::Error> {
        let (total_skills, in_progress, completed, total_hours): (i64, i64, i64, f64) =
            sqlx::query_as(
                "SELECT
                    COUNT(*),
                    COUNT(*) FILTER (WHERE progress_status = 'in_progress'),
                    COUNT(*) FILTER (WHERE progress_status = 'completed'),
                    COALESCE(SUM(hours_spent), 0)::DOUBLE PRECISION
                 FROM skills",
            )
            .fetch_one(pool)
            .await?;

        let by_type = sqlx::query_as::<_, ResourceTypeCount>(
            "SELECT resource_type, COUNT(*) AS count
             FROM skills
             GROUP BY resource_type
             ORDER BY resource_type ASC",
        )
        .fetch_all(pool)
        .await?;

        Ok(SkillStatistics {
            total_skills,
            in_progress,
            completed,
            total_hours,
            by_type,
        })
    }
}
