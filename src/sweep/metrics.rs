use super::types::{EvaluationRow, ResultTable};
use crate::error::{OpenSweepError, OswResult};

/// A request for one derived composite column: combine the rate of
/// `valid_series` (p) with the rate of `ood_series` (q) into an F-beta
/// score published under `name`.
#[derive(Debug, Clone)]
pub struct CompositePair {
    pub name: String,
    pub valid_series: String,
    pub ood_series: String,
    pub beta: f32,
}

impl CompositePair {
    pub fn new(
        name: impl Into<String>,
        valid_series: impl Into<String>,
        ood_series: impl Into<String>,
        beta: f32,
    ) -> Self {
        Self {
            name: name.into(),
            valid_series: valid_series.into(),
            ood_series: ood_series.into(),
            beta,
        }
    }
}

/// The beta used by every shipped composite. beta = 2 weights the OOD
/// (recall-like) rate four times the validation rate: 5pq / (4p + q).
pub const DEFAULT_BETA: f32 = 2.0;

/// Weighted harmonic combination of two rates: (1+b^2)pq / (b^2 p + q).
/// A zero denominator means both rates are zero; the detector has no
/// signal at that threshold and the composite is pinned to 0.0.
#[inline(always)]
pub fn f_beta(p: f32, q: f32, beta: f32) -> f32 {
    let beta2 = beta * beta;
    let denom = beta2 * p + q;
    if denom == 0.0 {
        0.0
    } else {
        (1.0 + beta2) * p * q / denom
    }
}

/// Appends the requested composite columns to `row`. Fails when a pair
/// references a series the row does not carry.
pub fn derive_metrics(row: &mut EvaluationRow, pairs: &[CompositePair]) -> OswResult<()> {
    for pair in pairs {
        let p = row
            .series_stats(&pair.valid_series)
            .ok_or_else(|| OpenSweepError::MetricNotFound(pair.valid_series.clone()))?
            .pct;
        let q = row
            .series_stats(&pair.ood_series)
            .ok_or_else(|| OpenSweepError::MetricNotFound(pair.ood_series.clone()))?
            .pct;
        row.push_derived(pair.name.clone(), f_beta(p, q, pair.beta));
    }
    Ok(())
}

/// Applies `derive_metrics` to every row of the table.
pub fn derive_table_metrics(table: &mut ResultTable, pairs: &[CompositePair]) -> OswResult<()> {
    for row in table.rows_mut() {
        derive_metrics(row, pairs)?;
    }
    Ok(())
}
