use super::types::SeriesStats;
use crate::series::ScoreSeries;

/// Counts how many values in `series` land on the correct side of
/// `threshold` under the series' direction. Comparison is strict on both
/// sides, so a value exactly equal to the threshold never counts.
pub fn classify(series: &ScoreSeries, threshold: f32) -> SeriesStats {
    let n = series.len();
    let direction = series.direction();
    let n_correct = series
        .values()
        .iter()
        .filter(|&&v| direction.matches(v, threshold))
        .count();

    let pct = if n == 0 {
        0.0
    } else {
        n_correct as f32 / n as f32
    };

    SeriesStats { n, n_correct, pct }
}
