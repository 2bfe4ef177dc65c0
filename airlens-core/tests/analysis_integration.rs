//! Integration tests for the full analysis pipeline
//!
//! Exercises the ranking, scoring, and classification stages end to end,
//! pins the golden regression value, and checks the pure-function laws
//! with proptest.

use airlens_core::{
    analyze, composite_score, rank, sub_index, validate_reading, Algorithm, AqiCategory,
    Pollutant, Reading, SimilarityRecord,
};

use proptest::prelude::*;

fn sample_reading() -> Reading {
    Reading::from_pairs(&[
        (Pollutant::Pm25, 35.4),
        (Pollutant::Pm10, 50.0),
        (Pollutant::O3, 40.0),
        (Pollutant::No2, 20.0),
        (Pollutant::So2, 5.0),
        (Pollutant::Co, 2.0),
    ])
}

fn record(id: usize, similarity: f32) -> SimilarityRecord {
    SimilarityRecord {
        id,
        similarity,
        reference: Reading::new(),
    }
}

#[test]
fn golden_composite_score() {
    // Pinned reference output. Sub-indices: pm25=100, pm10=46.296,
    // o3=37.037, no2=18.868, so2=7.143, co=22.727; weighted mean 50.825;
    // nudge (0.9 + 0.7) * 0.1; times the random-forest multiplier 1.02
    // rounds to 52.
    let score = composite_score(
        &sample_reading(),
        &[record(1, 0.9), record(2, 0.7)],
        Algorithm::RandomForest,
    );
    assert_eq!(score, 52);
    assert_eq!(AqiCategory::from_score(score as f32), AqiCategory::Moderate);
}

#[test]
fn analyze_end_to_end() {
    let reading = sample_reading();
    let references = [
        sample_reading(),
        Reading::new().with(Pollutant::Pm25, 150.0),
        Reading::new().with(Pollutant::Nh3, 8.0), // no shared weighted keys
    ];

    let analysis = analyze(&reading, &references, Algorithm::RandomForest);

    assert!(analysis.score <= 500);
    assert_eq!(analysis.similarities.len(), 3);
    // The identical reference ranks first with similarity 1
    assert_eq!(analysis.similarities[0].id, 1);
    assert_eq!(analysis.similarities[0].similarity, 1.0);
    // The disjoint reference ranks last with similarity 0
    assert_eq!(analysis.similarities[2].id, 3);
    assert_eq!(analysis.similarities[2].similarity, 0.0);
    assert_eq!(
        analysis.category,
        AqiCategory::from_score(analysis.score as f32)
    );
}

#[test]
fn analysis_is_idempotent() {
    let reading = sample_reading();
    let references = [
        Reading::new().with(Pollutant::Pm25, 30.0),
        Reading::new().with(Pollutant::Pm25, 80.0),
    ];

    let first = analyze(&reading, &references, Algorithm::Knn);
    let second = analyze(&reading, &references, Algorithm::Knn);
    assert_eq!(first, second);
}

#[test]
fn validated_reading_scores_cleanly() {
    let reading = sample_reading();
    validate_reading(&reading).expect("sample reading is well-formed");
    let analysis = analyze(&reading, &[], Algorithm::Svm);
    assert!(analysis.score <= 500);
}

#[test]
fn each_algorithm_stays_in_range() {
    let reading = sample_reading();
    for algorithm in Algorithm::ALL {
        let analysis = analyze(&reading, &[sample_reading()], algorithm);
        assert!(analysis.score <= 500, "{} overflowed the scale", algorithm);
    }
}

proptest! {
    #[test]
    fn sub_index_monotonic_in_first_pm25_band(a in 0.0f32..=12.0, b in 0.0f32..=12.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sub_index(Pollutant::Pm25, lo) <= sub_index(Pollutant::Pm25, hi));
    }

    #[test]
    fn similarity_stays_in_unit_interval(pm25 in 0.0f32..500.0, o3 in 0.0f32..500.0) {
        let current = Reading::new()
            .with(Pollutant::Pm25, 10.0)
            .with(Pollutant::O3, 40.0);
        let reference = Reading::new()
            .with(Pollutant::Pm25, pm25)
            .with(Pollutant::O3, o3);
        let ranked = rank(&current, &[reference]);
        prop_assert!(ranked[0].similarity > 0.0);
        prop_assert!(ranked[0].similarity <= 1.0);
    }

    #[test]
    fn classifier_is_total(score in proptest::num::f32::ANY) {
        // Any real input maps to exactly one bucket without panicking
        let category = AqiCategory::from_score(score);
        prop_assert!(AqiCategory::ALL.contains(&category));
    }

    #[test]
    fn score_never_leaves_scale(pm25 in 0.0f32..1000.0, s in 0.0f32..=1.0) {
        let reading = Reading::new().with(Pollutant::Pm25, pm25);
        let score = composite_score(&reading, &[record(1, s)], Algorithm::Knn);
        prop_assert!(score <= 500);
    }
}
