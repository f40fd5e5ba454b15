use crate::error::{OpenSweepError, OswResult};

/// An ordered, strictly increasing sequence of candidate thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdGrid {
    points: Vec<f32>,
}

impl ThresholdGrid {
    /// Sweep of the bounded [0, 1] probability domain: `0, by, 2*by, ...`
    /// up to and including 1.0 within floating tolerance.
    pub fn fixed_domain(by: f32) -> OswResult<Self> {
        Self::stepped(0.0, 1.0, by)
    }

    pub fn stepped(lo: f32, hi: f32, by: f32) -> OswResult<Self> {
        validate_bounds(lo, hi, by)?;

        let mut points = Vec::new();
        let mut i = 0usize;
        loop {
            let t = lo + i as f32 * by;
            // Tolerance keeps the upper boundary inclusive when lo + k*by
            // lands a float ulp past hi (e.g. 0.1 increments).
            if t > hi + by * 1e-5 {
                break;
            }
            points.push(t.min(hi));
            i += 1;
        }
        Ok(Self { points })
    }

    /// Sweep of an unbounded score domain: `floor(max_score / by) + 1`
    /// points evenly spaced from 0 to `max_score` inclusive. Degenerates
    /// to the single point 0 when `max_score == 0`.
    pub fn data_driven(max_score: f32, by: f32) -> OswResult<Self> {
        validate_bounds(0.0, max_score, by)?;

        let num_steps = (max_score / by).floor() as usize + 1;
        Ok(Self {
            points: linspace(0.0, max_score, num_steps),
        })
    }

    pub fn points(&self) -> &[f32] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn validate_bounds(lo: f32, hi: f32, by: f32) -> OswResult<()> {
    if !by.is_finite() || by <= 0.0 {
        return Err(OpenSweepError::InvalidGrid(format!(
            "increment must be positive and finite, got {}",
            by
        )));
    }
    if !hi.is_finite() {
        return Err(OpenSweepError::InvalidGrid(format!(
            "upper bound must be finite, got {}",
            hi
        )));
    }
    if hi < lo {
        return Err(OpenSweepError::InvalidGrid(format!(
            "inverted bounds: {} < {}",
            hi, lo
        )));
    }
    Ok(())
}

/// `num` evenly spaced values from `lo` to `hi`, first = lo, last = hi.
fn linspace(lo: f32, hi: f32, num: usize) -> Vec<f32> {
    match num {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (num - 1) as f32;
            let mut points: Vec<f32> = (0..num).map(|i| lo + i as f32 * step).collect();
            // Pin the endpoint so the grid maximum is exactly hi.
            points[num - 1] = hi;
            points
        }
    }
}
