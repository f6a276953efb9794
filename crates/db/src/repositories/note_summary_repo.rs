//! Repository for the `note_summaries` table.

use sqlx::PgPool;
use skilltrack_core::types::DbId;

use crate::models::note_summary::NoteSummary;

const COLUMNS: &str = "id, skill_id, summary, created_at, updated_at";

pub struct NoteSummaryRepo;

impl NoteSummaryRepo {
    /// Append a summary to a skill's history.
    pub async fn create(
        pool: &PgPool,
        skill_id: DbId,
        summary: &str,
    ) -> Result<NoteSummary, sqlx::Error> {
        let query = format!(
            "INSERT INTO note_summaries (skill_id, summary) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteSummary>(&query)
            .bind(skill_id)
            .bind(summary)
            .fetch_one(pool)
            .await
    }

    /// Summary history for a skill, newest first.
    pub async fn list_for_skill(
        pool: &PgPool,
        skill_id: DbId,
    ) -> Result<Vec<NoteSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM note_summaries
             WHERE skill_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, NoteSummary>(&query)
            .bind(skill_id)
            .fetch_all(pool)
            .await
    }
}
