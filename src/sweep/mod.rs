pub mod classify;
pub mod metrics;
pub mod select;
pub mod types;

pub use self::classify::classify;
pub use self::metrics::{derive_metrics, derive_table_metrics, f_beta, CompositePair, DEFAULT_BETA};
pub use self::select::select_best;
pub use self::types::{EvaluationRow, ResultTable, SeriesStats};

use crate::error::{OpenSweepError, OswResult};
use crate::grid::ThresholdGrid;
use crate::series::ScoreSeries;
use rayon::prelude::*;
use std::collections::HashSet;

/// Evaluates every series at every grid point, one row per threshold.
///
/// Each (threshold, series) classification is independent, so rows are
/// computed in parallel across thresholds; the indexed collect restores
/// grid order, keeping the output bit-identical run to run.
pub fn sweep(series_list: &[ScoreSeries], grid: &ThresholdGrid) -> OswResult<ResultTable> {
    let mut seen = HashSet::new();
    for series in series_list {
        if !seen.insert(series.name()) {
            return Err(OpenSweepError::DuplicateSeriesName(
                series.name().to_string(),
            ));
        }
    }

    let rows: Vec<EvaluationRow> = grid
        .points()
        .par_iter()
        .map(|&threshold| {
            let per_series = series_list
                .iter()
                .map(|s| (s.name().to_string(), classify(s, threshold)))
                .collect();
            EvaluationRow::new(threshold, per_series)
        })
        .collect();

    Ok(ResultTable::new(rows))
}
