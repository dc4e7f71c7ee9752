//! Linear sweep grids for the optimization searches.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// An inclusive, evenly spaced grid of sample points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    start: f64,
    end: f64,
    points: usize,
}

impl SweepRange {
    /// A grid of `points` samples from `start` to `end` inclusive.
    pub fn new(start: f64, end: f64, points: usize) -> AnalysisResult<Self> {
        if points == 0 {
            return Err(AnalysisError::EmptyRange {
                what: "a sweep needs at least one point",
            });
        }
        if !(start.is_finite() && end.is_finite()) || end < start {
            return Err(AnalysisError::EmptyRange {
                what: "sweep bounds must be finite and ordered",
            });
        }
        if points == 1 && end > start {
            return Err(AnalysisError::EmptyRange {
                what: "a single-point sweep needs equal bounds",
            });
        }
        Ok(Self { start, end, points })
    }

    /// A degenerate single-point grid.
    pub fn fixed(value: f64) -> AnalysisResult<Self> {
        Self::new(value, value, 1)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn points(&self) -> usize {
        self.points
    }

    /// Materialize the grid. The last sample is pinned to `end` so the
    /// upper bound is always evaluated exactly, regardless of rounding
    /// in the interior steps.
    pub fn values(&self) -> Vec<f64> {
        if self.points == 1 {
            return vec![self.start];
        }
        let step = (self.end - self.start) / (self.points - 1) as f64;
        (0..self.points)
            .map(|i| {
                if i == self.points - 1 {
                    self.end
                } else {
                    self.start + step * i as f64
                }
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every grid stays inside its bounds and hits both ends.
        #[test]
        fn grid_is_bounded(start in -1e3f64..1e3, width in 0.001f64..1e3, n in 2usize..200) {
            let end = start + width;
            let v = SweepRange::new(start, end, n).unwrap().values();
            prop_assert_eq!(v.len(), n);
            prop_assert_eq!(v[0], start);
            prop_assert_eq!(v[n - 1], end);
            for x in &v {
                prop_assert!(*x >= start - 1e-9 && *x <= end + 1e-9);
            }
        }
    }
}
