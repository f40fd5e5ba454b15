use opensweep::grid::ThresholdGrid;
use opensweep::series::{Direction, ScoreSeries};
use opensweep::sweep::{
    derive_table_metrics, f_beta, sweep, CompositePair, DEFAULT_BETA,
};
use rstest::rstest;

#[test]
fn test_beta_two_collapses_to_published_constants() {
    // (1 + 4)pq / (4p + q): the OOD rate is weighted 4:1.
    let p = 0.667;
    let q = 0.333;
    let expected = 5.0 * p * q / (4.0 * p + q);
    assert!((f_beta(p, q, DEFAULT_BETA) - expected).abs() < 1e-6);
}

#[rstest]
#[case(0.0, 0.0)]
#[case(1.0, 1.0)]
#[case(0.5, 0.5)]
fn test_equal_rates_yield_that_rate(#[case] p: f32, #[case] q: f32) {
    // F-beta of two equal rates is the rate itself, for any beta.
    assert!((f_beta(p, q, DEFAULT_BETA) - p).abs() < 1e-6);
    assert!((f_beta(p, q, 1.0) - p).abs() < 1e-6);
}

#[test]
fn test_zero_denominator_is_sentinel_not_nan() {
    let score = f_beta(0.0, 0.0, DEFAULT_BETA);
    assert_eq!(score, 0.0);
    assert!(!score.is_nan());
}

#[test]
fn test_one_sided_zero_rate_scores_zero() {
    assert_eq!(f_beta(1.0, 0.0, DEFAULT_BETA), 0.0);
    assert_eq!(f_beta(0.0, 1.0, DEFAULT_BETA), 0.0);
}

#[test]
fn test_derived_columns_appended_without_touching_stats() {
    let series = vec![
        ScoreSeries::new("valid", vec![0.1, 0.2, 0.9], Direction::Below),
        ScoreSeries::new("ood", vec![0.3, 0.6, 0.95], Direction::Above),
    ];
    let grid = ThresholdGrid::fixed_domain(0.5).unwrap();

    let mut table = sweep(&series, &grid).unwrap();
    let before = table.clone();

    let pairs = vec![CompositePair::new("W", "valid", "ood", DEFAULT_BETA)];
    derive_table_metrics(&mut table, &pairs).unwrap();

    for (row, plain) in table.rows().iter().zip(before.rows()) {
        assert_eq!(row.series_entries(), plain.series_entries());
        assert!(row.derived_metric("W").is_some());
    }
}

#[test]
fn test_missing_series_in_pair_fails() {
    let series = vec![ScoreSeries::new("valid", vec![0.1], Direction::Below)];
    let grid = ThresholdGrid::fixed_domain(0.5).unwrap();

    let mut table = sweep(&series, &grid).unwrap();
    let pairs = vec![CompositePair::new("AW", "valid", "additional", DEFAULT_BETA)];

    assert!(derive_table_metrics(&mut table, &pairs).is_err());
}
