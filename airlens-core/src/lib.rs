//! Deterministic air-quality scoring core for Airlens
//!
//! Turns raw pollutant readings into an EPA-style Air Quality Index:
//! per-pollutant sub-indices via breakpoint interpolation, a weighted
//! composite score nudged by similarity to reference samples, and a
//! category label for display.
//!
//! All operations are pure, synchronous, and allocation-light. The crate
//! runs on `no_std` targets; the caller owns any async orchestration.
//!
//! ```
//! use airlens_core::{analyze, Algorithm, Pollutant, Reading};
//!
//! let reading = Reading::new()
//!     .with(Pollutant::Pm25, 35.4)
//!     .with(Pollutant::O3, 40.0);
//!
//! let result = analyze(&reading, &[], Algorithm::RandomForest);
//! assert!(result.score <= 500);
//! println!("{}: {}", result.score, result.category.label());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod analysis;
pub mod breakpoint;
pub mod classify;
pub mod errors;
pub mod history;
pub mod pollutant;
pub mod score;
pub mod similarity;
pub mod validate;

// Public API
pub use analysis::{analyze, Analysis};
pub use breakpoint::{sub_index, BreakpointTable, Segment};
pub use classify::AqiCategory;
pub use errors::{ReadingError, ReadingResult};
pub use history::ScoreHistory;
pub use pollutant::{Pollutant, Reading};
pub use score::{composite_score, Algorithm};
pub use similarity::{rank, SimilarityRecord};
pub use validate::validate_reading;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
