//! Error types for reading validation
//!
//! The scoring core itself never fails: malformed keys pass through,
//! out-of-table values saturate, empty inputs score 0. What can fail is
//! the caller's input - NaN from a bad parse, a negative concentration
//! from a form - and those are rejected up front by
//! [`crate::validate::validate_reading`].
//!
//! Errors stay small and `Copy`: the key plus the offending value, no
//! heap, so they can cross embedded boundaries and sit in queues.

use thiserror_no_std::Error;

use crate::pollutant::Pollutant;

/// Result type for reading validation.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Why a reading was rejected before scoring.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ReadingError {
    /// Value is NaN or infinite
    #[error("{pollutant} reading is not a finite number")]
    NotFinite {
        /// Key carrying the invalid value
        pollutant: Pollutant,
    },

    /// Concentrations are non-negative by contract
    #[error("{pollutant} reading {value} is negative")]
    Negative {
        /// Key carrying the invalid value
        pollutant: Pollutant,
        /// The rejected value
        value: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotFinite { pollutant } => {
                defmt::write!(fmt, "{} reading is not finite", pollutant.name())
            }
            Self::Negative { pollutant, value } => {
                defmt::write!(fmt, "{} reading {} is negative", pollutant.name(), value)
            }
        }
    }
}
