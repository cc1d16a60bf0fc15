use ndarray::{Array1, ArrayView1};

use crate::{LogitErr, Result};

const GRID_START: f64 = 0.0;
const GRID_STEP: f64 = 0.01;
const GRID_LEN: usize = 100;

/// The separating line of a two-feature model, `w0·x0 + w1·x1 + b = 0`, solved for
/// `x1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionBoundary {
    w0: f64,
    w1: f64,
    b: f64,
}

impl DecisionBoundary {
    /// Creates a new `DecisionBoundary`.
    ///
    /// # Arguments
    /// * `w` - The model's weights, must have exactly two entries.
    /// * `b` - The model's bias.
    pub fn new(w: ArrayView1<f64>, b: f64) -> Result<Self> {
        if w.len() != 2 {
            return Err(LogitErr::SizeMismatch {
                what: "boundary weights",
                got: w.len(),
                expected: 2,
            });
        }

        Ok(Self {
            w0: w[0],
            w1: w[1],
            b,
        })
    }

    /// Evaluates the line at `x0`. Not finite when `w1` is zero.
    pub fn x1(&self, x0: f64) -> f64 {
        -(self.w0 * x0 + self.b) / self.w1
    }

    /// Samples the line over `[0, 1)` with a step of `0.01`.
    ///
    /// # Returns
    /// The `x0` grid and the matching `x1` values.
    pub fn points(&self) -> (Array1<f64>, Array1<f64>) {
        let x0 = Array1::from_shape_fn(GRID_LEN, |i| GRID_START + i as f64 * GRID_STEP);
        let x1 = x0.mapv(|x0| self.x1(x0));
        (x0, x1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn needs_two_weights() {
        let err = DecisionBoundary::new(array![1.0, 2.0, 3.0].view(), 0.0).unwrap_err();
        assert_eq!(
            err,
            LogitErr::SizeMismatch {
                what: "boundary weights",
                got: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn points_lie_on_the_line() {
        let w = array![3.0, 12.0];
        let b = -4.0;
        let boundary = DecisionBoundary::new(w.view(), b).unwrap();
        let (x0, x1) = boundary.points();

        assert_eq!(x0.len(), 100);
        assert_eq!(x0[0], 0.0);
        assert!((x0[99] - 0.99).abs() < 1e-12);

        for (&x0, &x1) in x0.iter().zip(&x1) {
            assert!((w[0] * x0 + w[1] * x1 + b).abs() < 1e-12);
        }
    }

    #[test]
    fn vertical_line_is_not_finite() {
        let boundary = DecisionBoundary::new(array![1.0, 0.0].view(), 1.0).unwrap();
        assert!(!boundary.x1(0.5).is_finite());
    }
}
