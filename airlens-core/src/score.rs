//! Weighted composite scoring
//!
//! Combines per-pollutant sub-indices into a single 0-500 score:
//!
//! ```text
//! base  = Σ sub_index(p) * w(p) / Σ w(p)      over pollutants present
//! nudge = Σ similarity * 0.1                  over the top two matches
//! score = round((base + nudge) * multiplier)  clamped to [0, 500]
//! ```
//!
//! Weights cover six pollutants and sum to 1.0; pollutants missing from a
//! reading drop out of both the numerator and the denominator, so a
//! partial reading is still scored on what it has. The per-algorithm
//! multiplier is a fixed display heuristic with no statistical meaning;
//! its exact values are preserved for output parity.

use crate::breakpoint::sub_index;
use crate::pollutant::{Pollutant, Reading};
use crate::similarity::SimilarityRecord;

use core::fmt;

/// Maximum composite score.
pub const MAX_SCORE: u16 = 500;

/// Weight applied to each of the top two similarity matches.
pub const SIMILARITY_NUDGE: f32 = 0.1;

/// Composite weights per pollutant. Sum to 1.0.
pub const WEIGHTS: [(Pollutant, f32); 6] = [
    (Pollutant::Pm25, 0.30),
    (Pollutant::Pm10, 0.20),
    (Pollutant::O3, 0.15),
    (Pollutant::No2, 0.10),
    (Pollutant::So2, 0.10),
    (Pollutant::Co, 0.15),
];

/// Composite weight for a pollutant, if it carries one.
pub fn weight(pollutant: Pollutant) -> Option<f32> {
    WEIGHTS
        .iter()
        .find(|(p, _)| *p == pollutant)
        .map(|(_, w)| *w)
}

/// Cosmetic model tag selected in the dashboard.
///
/// Each tag maps to a fixed scalar multiplier on the composite score.
/// There is no model behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Algorithm {
    /// Multiplier 0.95
    NaiveBayes,
    /// Multiplier 1.05
    Knn,
    /// Multiplier 1.00
    Svm,
    /// Multiplier 1.02
    RandomForest,
}

impl Algorithm {
    /// All tags.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::NaiveBayes,
        Algorithm::Knn,
        Algorithm::Svm,
        Algorithm::RandomForest,
    ];

    /// Fixed score multiplier for this tag.
    pub const fn multiplier(&self) -> f32 {
        match self {
            Algorithm::NaiveBayes => 0.95,
            Algorithm::Knn => 1.05,
            Algorithm::Svm => 1.00,
            Algorithm::RandomForest => 1.02,
        }
    }

    /// Stable name, as used in form selects and wire formats.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::NaiveBayes => "naive-bayes",
            Algorithm::Knn => "knn",
            Algorithm::Svm => "svm",
            Algorithm::RandomForest => "random-forest",
        }
    }

    /// Parse a tag from its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the composite score for a reading.
///
/// `similarities` need not be pre-sorted; the two largest similarities
/// are selected here. Empty readings score 0. The result is rounded and
/// clamped into `[0, 500]`. Pure; never panics for finite input.
pub fn composite_score(
    reading: &Reading,
    similarities: &[SimilarityRecord],
    algorithm: Algorithm,
) -> u16 {
    let mut weighted_sum = 0.0f32;
    let mut weight_used = 0.0f32;

    for (pollutant, w) in WEIGHTS {
        if let Some(value) = reading.get(pollutant) {
            weighted_sum += sub_index(pollutant, value) * w;
            weight_used += w;
        }
    }

    // Guard: no weighted pollutant present
    let base = if weight_used > 0.0 {
        weighted_sum / weight_used
    } else {
        0.0
    };

    let nudge = similarity_nudge(similarities);
    let combined = (base + nudge) * algorithm.multiplier();

    let rounded = libm::roundf(combined);
    rounded.clamp(0.0, MAX_SCORE as f32) as u16
}

/// Sum of `similarity * 0.1` over the two largest similarities.
///
/// Selects the top two in one pass instead of sorting, so unsorted input
/// costs nothing extra.
fn similarity_nudge(similarities: &[SimilarityRecord]) -> f32 {
    let mut best: Option<f32> = None;
    let mut second: Option<f32> = None;

    for record in similarities {
        let s = record.similarity;
        match best {
            Some(b) if s <= b => {
                if second.is_none() || s > second.unwrap_or(f32::NEG_INFINITY) {
                    second = Some(s);
                }
            }
            _ => {
                second = best;
                best = Some(s);
            }
        }
    }

    best.unwrap_or(0.0) * SIMILARITY_NUDGE + second.unwrap_or(0.0) * SIMILARITY_NUDGE
}
