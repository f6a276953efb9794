//! Skill category taxonomy.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use skilltrack_core::types::{DbId, Timestamp};

/// A row from the `skill_categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SkillCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkillCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
