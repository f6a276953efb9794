//! Domain logic for the skill tracker.
//!
//! Everything here is pure: enumerations, validation, and the numeric
//! routines behind recommendations and mastery prediction. Database access
//! lives in `skilltrack-db`, model-service calls in `skilltrack-inference`.

pub mod categorization;
pub mod error;
pub mod mastery;
pub mod progress;
pub mod recommendation;
pub mod skill;
pub mod summarization;
pub mod types;
