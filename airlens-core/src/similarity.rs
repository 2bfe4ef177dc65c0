//! Similarity ranking against reference samples
//!
//! Compares the current reading to previously observed (or synthetic)
//! readings and ranks the matches. Similarity is a normalized inverse of
//! the root-mean-square difference over the keys both sides share:
//!
//! ```text
//! distance   = sqrt(mean((current[k] - reference[k])²))   over shared keys
//! similarity = 1 / (1 + distance)                         in (0, 1]
//! ```
//!
//! Keys missing from either side are skipped for that pair, not treated
//! as zero; a pair with no shared finite keys gets similarity 0. The top
//! matches feed the composite scorer's nudge term.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::pollutant::{Pollutant, Reading};

/// One ranked comparison between the current reading and a reference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarityRecord {
    /// 1-based position of the reference in the supplied sequence.
    ///
    /// Assigned before sorting, so a record keeps its source identity
    /// across re-ranking.
    pub id: usize,
    /// Similarity in [0, 1]; 1 means identical over shared keys.
    pub similarity: f32,
    /// The reference reading this record compares against.
    pub reference: Reading,
}

/// Similarity between two readings over their shared finite keys.
///
/// Returns 0.0 when no key is present and finite on both sides.
pub fn similarity(current: &Reading, reference: &Reading) -> f32 {
    let mut sum_sq = 0.0f32;
    let mut comparable = 0u32;

    for pollutant in Pollutant::ALL {
        let (Some(a), Some(b)) = (current.get(pollutant), reference.get(pollutant)) else {
            continue;
        };
        if !a.is_finite() || !b.is_finite() {
            continue;
        }
        let diff = a - b;
        sum_sq += diff * diff;
        comparable += 1;
    }

    if comparable == 0 {
        return 0.0;
    }

    let distance = libm::sqrtf(sum_sq / comparable as f32);
    1.0 / (1.0 + distance)
}

/// Rank references by similarity to the current reading, descending.
///
/// Ties keep supply order (stable sort), so the output is deterministic.
/// An empty reference set yields an empty ranking.
pub fn rank(current: &Reading, references: &[Reading]) -> Vec<SimilarityRecord> {
    let mut records: Vec<SimilarityRecord> = references
        .iter()
        .enumerate()
        .map(|(i, reference)| SimilarityRecord {
            id: i + 1,
            similarity: similarity(current, reference),
            reference: *reference,
        })
        .collect();

    // Similarities are finite by construction, so the comparison is total
    records.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    records
}
