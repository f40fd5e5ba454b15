use super::types::{EvaluationRow, ResultTable};
use crate::error::{OpenSweepError, OswResult};

/// Returns the row maximizing the named derived metric. Ties are broken
/// by earliest grid position, so the smallest threshold wins.
pub fn select_best<'a>(table: &'a ResultTable, metric: &str) -> OswResult<&'a EvaluationRow> {
    let mut best: Option<(&EvaluationRow, f32)> = None;

    for row in table.rows() {
        if let Some(value) = row.derived_metric(metric) {
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((row, value)),
            }
        }
    }

    best.map(|(row, _)| row)
        .ok_or_else(|| OpenSweepError::MetricNotFound(metric.to_string()))
}
