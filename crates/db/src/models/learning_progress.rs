//! Learning progress log model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use skilltrack_core::types::{Date, DbId, Timestamp};

/// A row from the `learning_progress` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LearningProgress {
    pub id: DbId,
    pub skill_id: DbId,
    pub date: Date,
    pub hours_spent: f64,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for logging a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLearningProgress {
    pub skill_id: DbId,
    pub date: Date,
    pub hours_spent: f64,
    #[serde(default)]
    pub notes: String,
}

/// DTO for editing a logged session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLearningProgress {
    pub date: Option<Date>,
    pub hours_spent: Option<f64>,
    pub notes: Option<String>,
}

/// Query parameters for listing progress (`?skill_id=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressFilter {
    pub skill_id: Option<DbId>,
}
