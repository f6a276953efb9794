//! Learning progress log limits.

use crate::error::CoreError;
use crate::skill::validate_hours;

/// Upper bound on one entry's hours; values carry at most one decimal.
pub const MAX_ENTRY_HOURS: f64 = 999.9;

/// Validate the hours recorded on a single progress entry.
pub fn validate_entry_hours(hours: f64) -> Result<(), CoreError> {
    validate_hours(hours, MAX_ENTRY_HOURS)
}
