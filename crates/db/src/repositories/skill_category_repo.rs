//! Repository for the `skill_categories` table.

use sqlx::PgPool;
use skilltrack_core::categorization::{default_description, DEFAULT_CATEGORIES};
use skilltrack_core::types::DbId;

use crate::models::skill_category::{CreateSkillCategory, SkillCategory};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct SkillCategoryRepo;

impl SkillCategoryRepo {
    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SkillCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_categories ORDER BY id ASC");
        sqlx::query_as::<_, SkillCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Category names in insertion order (classifier labels).
    pub async fn list_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM skill_categories ORDER BY id ASC")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Create a category. Duplicate names violate `uq_skill_categories_name`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSkillCategory,
    ) -> Result<SkillCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO skill_categories (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skill_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert the default taxonomy. Existing names are left untouched, so
    /// repeated calls are harmless. Returns the number of rows inserted.
    pub async fn seed_defaults(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;
        for name in DEFAULT_CATEGORIES {
            let result = sqlx::query(
                "INSERT INTO skill_categories (name, description) VALUES ($1, $2)
                 ON CONFLICT (name) DO NOTHING",
            )
            .bind(*name)
            .bind(default_description(name))
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }
        tx.commit().await?;

        if inserted > 0 {
            tracing::info!(inserted, "Seeded default skill categories");
        }
        Ok(inserted)
    }
}
