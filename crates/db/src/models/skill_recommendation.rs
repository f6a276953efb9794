//! Cached similarity between two skills.

use serde::Serialize;
use sqlx::FromRow;
use skilltrack_core::types::{DbId, Timestamp};

/// A row from the `skill_recommendations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SkillRecommendation {
    pub id: DbId,
    pub skill_id: DbId,
    pub recommended_skill_id: DbId,
    pub similarity_score: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A stored recommendation joined with the recommended skill's name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecommendedSkill {
    pub id: DbId,
    pub name: String,
    pub similarity: f64,
}
