use criterion::{criterion_group, criterion_main, Criterion};
use opensweep::grid::ThresholdGrid;
use opensweep::series::{Direction, ScoreSeries};
use opensweep::sweep::{derive_table_metrics, sweep, CompositePair, DEFAULT_BETA};
use std::hint::black_box;

fn setup_series(n: usize) -> Vec<ScoreSeries> {
    // Deterministic pseudo-scores spread over [0, 1); no RNG needed for
    // a throughput benchmark.
    let valid: Vec<f32> = (0..n).map(|i| (i as f32 * 0.6180339) % 1.0).collect();
    let ood: Vec<f32> = (0..n).map(|i| (i as f32 * 0.7548776) % 1.0).collect();
    let crops: Vec<f32> = (0..n / 2).map(|i| (i as f32 * 0.8191725) % 1.0).collect();

    vec![
        ScoreSeries::new("valid", valid, Direction::Below),
        ScoreSeries::new("ood", ood, Direction::Above),
        ScoreSeries::new("crops", crops, Direction::Above),
    ]
}

fn criterion_benchmark(c: &mut Criterion) {
    let series = setup_series(100_000);
    let grid = ThresholdGrid::fixed_domain(0.05).unwrap();

    c.bench_function("sweep (3 series x 100k scores, 21 thresholds)", |b| {
        b.iter(|| sweep(black_box(&series), black_box(&grid)).unwrap())
    });

    let pairs = vec![
        CompositePair::new("W", "valid", "ood", DEFAULT_BETA),
        CompositePair::new("AW", "valid", "crops", DEFAULT_BETA),
    ];
    c.bench_function("sweep + derive (2 composites)", |b| {
        b.iter(|| {
            let mut table = sweep(black_box(&series), black_box(&grid)).unwrap();
            derive_table_metrics(&mut table, black_box(&pairs)).unwrap();
            table
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
