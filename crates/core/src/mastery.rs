//! Mastery date prediction (pure logic).
//!
//! Fits an ordinary least-squares line of cumulative hours against days since
//! the first logged session, then extrapolates to the mastery target.

use chrono::Duration;
use serde::Serialize;

use crate::types::Date;

/// Hours of engagement treated as "mastered".
pub const MASTERY_TARGET_HOURS: f64 = 40.0;

/// Weekly pace recorded alongside every stored prediction.
pub const DEFAULT_HOURS_PER_WEEK: f64 = 7.0;

/// Message returned when no prediction can be made.
pub const INSUFFICIENT_DATA_MESSAGE: &str = "Insufficient data for prediction";

/// A single logged session used as regression input.
#[derive(Debug, Clone, Copy)]
pub struct ProgressPoint {
    pub date: Date,
    pub hours: f64,
}

/// Result of a successful prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MasteryPrediction {
    pub predicted_date: Date,
    /// Coefficient of determination of the fit, in `[0, 1]`.
    pub confidence: f64,
}

/// Fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    pub r_squared: f64,
}

/// Ordinary least squares on paired samples.
///
/// Returns `None` for empty input or mismatched lengths. When every `x` is
/// equal the slope is zero and the intercept is the mean of `y`.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let sxx: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    let sxy: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
    let intercept = mean_y - slope * mean_x;

    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
        .sum();
    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();

    // Constant y: a perfect fit scores 1, anything else 0.
    let r_squared = if ss_tot == 0.0 {
        if ss_res == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_res / ss_tot
    };

    Some(LinearFit {
        intercept,
        slope,
        r_squared,
    })
}

/// Predict when the learner reaches [`MASTERY_TARGET_HOURS`].
///
/// * No entries → `None`.
/// * Already at or past the target → `today` with confidence `1.0`.
/// * Flat or negative trend → `None`.
pub fn predict_mastery(entries: &[ProgressPoint], today: Date) -> Option<MasteryPrediction> {
    if entries.is_empty() {
        return None;
    }

    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|p| p.date);

    let start = sorted[0].date;
    let xs: Vec<f64> = sorted
        .iter()
        .map(|p| (p.date - start).num_days() as f64)
        .collect();
    let ys: Vec<f64> = sorted
        .iter()
        .scan(0.0, |total, p| {
            *total += p.hours;
            Some(*total)
        })
        .collect();

    let current_hours = *ys.last()?;
    let remaining = MASTERY_TARGET_HOURS - current_hours;
    if remaining <= 0.0 {
        return Some(MasteryPrediction {
            predicted_date: today,
            confidence: 1.0,
        });
    }

    let fit = fit_line(&xs, &ys)?;
    if fit.slope <= 0.0 {
        return None;
    }

    // A near-flat trend puts the date past anything chrono can represent.
    let days = (remaining / fit.slope).trunc();
    if !days.is_finite() || days > i64::MAX as f64 {
        return None;
    }
    let offset = Duration::try_days(days as i64)?;
    let predicted_date = today.checked_add_signed(offset)?;

    Some(MasteryPrediction {
        predicted_date,
        confidence: fit.r_squared.clamp(0.0, 1.0),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
