//! Pure arithmetic helpers: grade averaging and birth-year estimation.

use crate::error::{AppError, AppResult};
use crate::person::Person;

/// Sanity floor for the current year, guarding against corrupt clocks.
const MIN_CURRENT_YEAR: i32 = 1900;

/// Arithmetic mean of `values`.
///
/// An empty slice is a reportable error, never a silent `0.0` or NaN.
pub fn compute_average(values: &[f64]) -> AppResult<f64> {
    if values.is_empty() {
        return Err(AppError::EmptyGrades);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Estimated birth year: `current_year - age`.
///
/// Rejects `current_year` below 1900 regardless of age. The age is a
/// `u8`, so the original's clamp to non-negative values holds by type.
pub fn estimate_birth_year(person: &Person, current_year: i32) -> AppResult<i32> {
    if current_year < MIN_CURRENT_YEAR {
        return Err(AppError::YearOutOfRange { year: current_year });
    }
    Ok(current_year - i32::from(person.age()))
}
