use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

/// Which side of the threshold counts as a correct classification.
///
/// `Below` is the outlier-score convention: an in-distribution sample is
/// accepted when its score is strictly less than the threshold. `Above` is
/// the mirror used for OOD probes (and for probability-of-real scores where
/// in-distribution samples sit near 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Below,
    Above,
}

impl Direction {
    /// Strict comparison. Values exactly equal to the threshold are never
    /// counted as correct under either direction.
    #[inline(always)]
    pub fn matches(&self, value: f32, threshold: f32) -> bool {
        match self {
            Direction::Below => value < threshold,
            Direction::Above => value > threshold,
        }
    }
}

/// A named, immutable score sequence with its comparison direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSeries {
    name: String,
    values: Vec<f32>,
    direction: Direction,
}

impl ScoreSeries {
    pub fn new(name: impl Into<String>, values: Vec<f32>, direction: Direction) -> Self {
        let name = name.into();
        if values.is_empty() {
            warn!("Series '{}' is empty. Its rate will be 0.0 at every threshold.", name);
        }
        Self { name, values, direction }
    }

    /// Builds a derived series by concatenating the values of `parts`,
    /// in order. Used for the union of auxiliary OOD probes (crops +
    /// random + any extra sources) evaluated as a single series.
    pub fn concat(
        name: impl Into<String>,
        direction: Direction,
        parts: &[&ScoreSeries],
    ) -> Self {
        let total: usize = parts.iter().map(|s| s.values.len()).sum();
        let mut values = Vec::with_capacity(total);
        for part in parts {
            values.extend_from_slice(&part.values);
        }
        Self::new(name, values, direction)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_value(&self) -> Option<f32> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f32| a.max(v))))
    }
}
