//! Skill model, DTOs, and aggregate statistics.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use skilltrack_core::types::{DbId, Timestamp};

use crate::models::learning_progress::LearningProgress;

/// A row from the `skills` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub resource_type: String,
    pub platform: String,
    pub url: String,
    pub progress_status: String,
    pub hours_spent: f64,
    pub difficulty_rating: i16,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A skill together with its progress log, as returned by detail and list
/// endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SkillDetail {
    #[serde(flatten)]
    pub skill: Skill,
    /// Progress entries, newest date first.
    pub progress_entries: Vec<LearningProgress>,
    /// Sum of `hours_spent` across `progress_entries`.
    pub total_hours: f64,
}

impl SkillDetail {
    pub fn new(skill: Skill, progress_entries: Vec<LearningProgress>) -> Self {
        let total_hours = progress_entries.iter().map(|e| e.hours_spent).sum();
        Self {
            skill,
            progress_entries,
            total_hours,
        }
    }
}

/// DTO for creating a new skill.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub resource_type: String,
    pub platform: String,
    #[serde(default)]
    pub url: String,
    pub progress_status: Option<String>,
    pub hours_spent: Option<f64>,
    pub difficulty_rating: Option<i16>,
    #[serde(default)]
    pub notes: String,
}

/// DTO for updating a skill. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub description: Option<String>,
    pub resource_type: Option<String>,
    pub platform: Option<String>,
    pub url: Option<String>,
    pub progress_status: Option<String>,
    pub hours_spent: Option<f64>,
    pub difficulty_rating: Option<i16>,
    pub notes: Option<String>,
}

/// Optional list filters (`?progress_status=&resource_type=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillFilter {
    pub progress_status: Option<String>,
    pub resource_type: Option<String>,
}

/// Per-resource-type skill count.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResourceTypeCount {
    pub resource_type: String,
    pub count: i64,
}

/// Aggregate statistics across all skills.
#[derive(Debug, Clone, Serialize)]
pub struct SkillStatistics {
    pub total_skills: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub total_hours: f64,
    pub by_type: Vec<ResourceTypeCount>,
}
