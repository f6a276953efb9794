//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where rows are editable

pub mod learning_progress;
pub mod mastery_prediction;
pub mod note_summary;
pub mod skill;
pub mod skill_category;
pub mod skill_recommendation;
