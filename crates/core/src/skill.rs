//! Skill enumerations, field limits, and validation.
//!
//! Resource types and progress statuses are stored as TEXT and guarded by
//! `CHECK` constraints; the constants below mirror those constraints so
//! handlers can reject bad input with a 400 before touching the database.

use validator::ValidateUrl;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Resource types
// ---------------------------------------------------------------------------

pub const RESOURCE_TYPE_VIDEO: &str = "video";
pub const RESOURCE_TYPE_COURSE: &str = "course";
pub const RESOURCE_TYPE_ARTICLE: &str = "article";
pub const RESOURCE_TYPE_BOOK: &str = "book";
pub const RESOURCE_TYPE_OTHER: &str = "other";
pub const VALID_RESOURCE_TYPES: &[&str] = &[
    RESOURCE_TYPE_VIDEO,
    RESOURCE_TYPE_COURSE,
    RESOURCE_TYPE_ARTICLE,
    RESOURCE_TYPE_BOOK,
    RESOURCE_TYPE_OTHER,
];

// ---------------------------------------------------------------------------
// Progress statuses
// ---------------------------------------------------------------------------

pub const STATUS_NOT_STARTED: &str = "not_started";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const VALID_PROGRESS_STATUSES: &[&str] =
    &[STATUS_NOT_STARTED, STATUS_IN_PROGRESS, STATUS_COMPLETED];

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

pub const MIN_DIFFICULTY: i16 = 1;
pub const MAX_DIFFICULTY: i16 = 5;
pub const DEFAULT_DIFFICULTY: i16 = MIN_DIFFICULTY;

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_PLATFORM_LEN: usize = 100;
/// Upper bound on a skill's total hours; values carry at most one decimal.
pub const MAX_SKILL_HOURS: f64 = 9999.9;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate_skill_name(name: &str) -> Result<(), CoreError> {
    validate_text_len("name", name, MAX_NAME_LEN)
}

pub fn validate_platform(platform: &str) -> Result<(), CoreError> {
    validate_text_len("platform", platform, MAX_PLATFORM_LEN)
}

/// An empty URL is allowed; anything else must parse as a URL.
pub fn validate_url(url: &str) -> Result<(), CoreError> {
    if url.is_empty() || url.validate_url() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid URL '{url}'")))
    }
}

pub fn validate_resource_type(value: &str) -> Result<(), CoreError> {
    validate_choice("resource type", value, VALID_RESOURCE_TYPES)
}

pub fn validate_progress_status(value: &str) -> Result<(), CoreError> {
    validate_choice("progress status", value, VALID_PROGRESS_STATUSES)
}

pub fn validate_difficulty(rating: i16) -> Result<(), CoreError> {
    if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Difficulty rating must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {rating}"
        )))
    }
}

pub fn validate_skill_hours(hours: f64) -> Result<(), CoreError> {
    validate_hours(hours, MAX_SKILL_HOURS)
}

/// Shared hours check: finite, between 0 and `max`, one decimal place at most.
pub(crate) fn validate_hours(hours: f64, max: f64) -> Result<(), CoreError> {
    if !hours.is_finite() || !(0.0..=max).contains(&hours) {
        return Err(CoreError::Validation(format!(
            "Hours spent must be between 0 and {max}, got {hours}"
        )));
    }
    let tenths = hours * 10.0;
    if (tenths.round() - tenths).abs() > 1e-9 {
        return Err(CoreError::Validation(format!(
            "Hours spent must have at most one decimal place, got {hours}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_text_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

fn validate_choice(field: &str, value: &str, valid: &[&str]) -> Result<(), CoreError> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Must be one of: {}",
            valid.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
