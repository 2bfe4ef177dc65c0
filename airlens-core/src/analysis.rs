//! One-call analysis pipeline
//!
//! Wires the three stages together the way the dashboard consumes them:
//! rank the reference samples, score the reading with the top matches,
//! classify the score. Each invocation is pure and self-contained, so
//! callers may run analyses concurrently without coordination.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::classify::AqiCategory;
use crate::pollutant::Reading;
use crate::score::{composite_score, Algorithm};
use crate::similarity::{rank, SimilarityRecord};

/// Result of one analysis invocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Composite score in [0, 500].
    pub score: u16,
    /// Category bucket for the score.
    pub category: AqiCategory,
    /// Reference matches, ranked by similarity descending.
    pub similarities: Vec<SimilarityRecord>,
}

/// Run the full pipeline: rank references, score the reading, classify.
pub fn analyze(reading: &Reading, references: &[Reading], algorithm: Algorithm) -> Analysis {
    let similarities = rank(reading, references);
    let score = composite_score(reading, &similarities, algorithm);
    let category = AqiCategory::from_score(score as f32);

    Analysis {
        score,
        category,
        similarities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pollutant::Pollutant;

    #[test]
    fn empty_inputs_are_good() {
        let analysis = analyze(&Reading::new(), &[], Algorithm::RandomForest);
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.category, AqiCategory::Good);
        assert!(analysis.similarities.is_empty());
    }

    #[test]
    fn category_matches_score() {
        let reading = Reading::new()
            .with(Pollutant::Pm25, 40.0)
            .with(Pollutant::O3, 60.0);
        let analysis = analyze(&reading, &[], Algorithm::Svm);
        assert_eq!(analysis.category, AqiCategory::from_score(analysis.score as f32));
    }

    #[test]
    fn references_flow_into_similarities() {
        let reading = Reading::new().with(Pollutant::Pm25, 20.0);
        let references = [
            Reading::new().with(Pollutant::Pm25, 200.0),
            Reading::new().with(Pollutant::Pm25, 20.0),
        ];
        let analysis = analyze(&reading, &references, Algorithm::Svm);
        assert_eq!(analysis.similarities.len(), 2);
        assert_eq!(analysis.similarities[0].id, 2);
        assert_eq!(analysis.similarities[0].similarity, 1.0);
    }
}
