//! Generated note summaries (append-only).

use serde::Serialize;
use sqlx::FromRow;
use skilltrack_core::types::{DbId, Timestamp};

/// A row from the `note_summaries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NoteSummary {
    pub id: DbId,
    pub skill_id: DbId,
    pub summary: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
