use serde::{Deserialize, Serialize};

/// Hit counts for one series at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub n: usize,
    pub n_correct: usize,
    pub pct: f32,
}

/// One row of the sweep result: the threshold, per-series stats in input
/// order, and any derived composite columns appended afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRow {
    pub threshold: f32,
    per_series: Vec<(String, SeriesStats)>,
    derived: Vec<(String, f32)>,
}

impl EvaluationRow {
    pub fn new(threshold: f32, per_series: Vec<(String, SeriesStats)>) -> Self {
        Self {
            threshold,
            per_series,
            derived: Vec::new(),
        }
    }

    pub fn series_stats(&self, name: &str) -> Option<&SeriesStats> {
        self.per_series
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn series_entries(&self) -> &[(String, SeriesStats)] {
        &self.per_series
    }

    pub fn derived_metric(&self, name: &str) -> Option<f32> {
        self.derived
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn derived_entries(&self) -> &[(String, f32)] {
        &self.derived
    }

    /// Appends a derived column. Existing per-series stats are never
    /// touched after row assembly.
    pub fn push_derived(&mut self, name: impl Into<String>, value: f32) {
        self.derived.push((name.into(), value));
    }
}

/// The full sweep output, one row per grid point, in grid order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    rows: Vec<EvaluationRow>,
}

impl ResultTable {
    pub fn new(rows: Vec<EvaluationRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[EvaluationRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [EvaluationRow] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
