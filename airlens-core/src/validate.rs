//! Caller-side reading validation
//!
//! The core's contract puts input validation on the caller: values must
//! be finite and non-negative before they reach the normalizer. This
//! module is that check, done once at the boundary so the pure pipeline
//! behind it never has to.

use crate::errors::{ReadingError, ReadingResult};
use crate::pollutant::{Pollutant, Reading};

/// Validate a single value for a key.
pub fn validate_value(pollutant: Pollutant, value: f32) -> ReadingResult<()> {
    if !value.is_finite() {
        return Err(ReadingError::NotFinite { pollutant });
    }
    if value < 0.0 {
        return Err(ReadingError::Negative { pollutant, value });
    }
    Ok(())
}

/// Validate every present value in a reading.
///
/// Returns the first violation in slot order.
pub fn validate_reading(reading: &Reading) -> ReadingResult<()> {
    for (pollutant, value) in reading.iter() {
        validate_value(pollutant, value)?;
    }
    Ok(())
}
