//! Stored mastery predictions (append-only).

use serde::Serialize;
use sqlx::FromRow;
use skilltrack_core::types::{Date, DbId, Timestamp};

/// A row from the `skill_mastery_predictions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SkillMasteryPrediction {
    pub id: DbId,
    pub skill_id: DbId,
    pub predicted_date: Date,
    pub confidence_score: f64,
    pub hours_per_week: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a new prediction.
#[derive(Debug, Clone)]
pub struct CreateMasteryPrediction {
    pub skill_id: DbId,
    pub predicted_date: Date,
    pub confidence_score: f64,
    pub hours_per_week: f64,
}
