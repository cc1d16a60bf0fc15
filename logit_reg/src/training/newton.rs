use ndarray::{Array1, ArrayView1, ArrayView2};
use rayon::prelude::*;

use crate::arch::{score, sigmoid};

/// First and second derivatives of the summed negative log-likelihood for one pass
/// over the samples.
///
/// The second derivative is collapsed into one scalar per parameter group: every
/// sample contributes `‖x‖²·p·(1 - p)` for the weights and `p·(1 - p)` for the bias.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonStep {
    pub grad_w: Array1<f64>,
    pub grad_b: f64,
    pub curv_w: f64,
    pub curv_b: f64,
}

impl NewtonStep {
    fn zeros(x_size: usize) -> Self {
        Self {
            grad_w: Array1::zeros(x_size),
            grad_b: 0.0,
            curv_w: 0.0,
            curv_b: 0.0,
        }
    }

    /// Adds the contribution of a single sample.
    fn accumulate(&mut self, x: ArrayView1<f64>, y: f64, p1: f64) {
        let residual = p1 - y;
        self.grad_w.scaled_add(residual, &x);
        self.grad_b += residual;
        self.curv_w += x.dot(&x) * p1 * (1.0 - p1);
        self.curv_b += p1 * (1.0 - p1);
    }

    fn merge(mut self, other: Self) -> Self {
        self.grad_w += &other.grad_w;
        self.grad_b += other.grad_b;
        self.curv_w += other.curv_w;
        self.curv_b += other.curv_b;
        self
    }

    /// Accumulates the derivatives over every sample, in order.
    ///
    /// # Arguments
    /// * `w` - The current weights.
    /// * `b` - The current bias.
    /// * `x` - The design matrix.
    /// * `y` - The labels.
    pub fn sequential(w: ArrayView1<f64>, b: f64, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Self {
        let mut step = Self::zeros(w.len());

        for (x, &y) in x.rows().into_iter().zip(y) {
            let p1 = sigmoid(score(w, b, x));
            step.accumulate(x, y, p1);
        }

        step
    }

    /// Same as `sequential` but the samples are split among the rayon thread pool.
    ///
    /// Partial sums are combined in an unspecified order, so the result may differ
    /// from `sequential` in the last bits.
    pub fn parallel(w: ArrayView1<f64>, b: f64, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Self {
        let x_size = w.len();

        (0..x.nrows())
            .into_par_iter()
            .fold(
                || Self::zeros(x_size),
                |mut step, i| {
                    let row = x.row(i);
                    let p1 = sigmoid(score(w, b, row));
                    step.accumulate(row, y[i], p1);
                    step
                },
            )
            .reduce(|| Self::zeros(x_size), Self::merge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn zero_parameters_give_half_probabilities() {
        let w = array![0.0, 0.0];
        let x = array![[1.0, 2.0], [3.0, 0.0]];
        let y = array![1.0, 0.0];

        let step = NewtonStep::sequential(w.view(), 0.0, x.view(), y.view());

        // p1 = 0.5 everywhere: residuals -0.5 and 0.5
        assert_eq!(step.grad_w, array![1.0, -1.0]);
        assert_eq!(step.grad_b, 0.0);
        assert_eq!(step.curv_w, (5.0 + 9.0) * 0.25);
        assert_eq!(step.curv_b, 0.5);
    }

    #[test]
    fn saturated_samples_have_no_curvature() {
        let w = array![100.0];
        let x = array![[1.0]];
        let y = array![1.0];

        let step = NewtonStep::sequential(w.view(), 0.0, x.view(), y.view());
        assert_eq!(step.curv_w, 0.0);
        assert_eq!(step.curv_b, 0.0);
        assert_eq!(step.grad_w, array![0.0]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let w = array![0.3, -1.2, 0.7];
        let b = 0.25;
        let x = ndarray::Array2::from_shape_fn((257, 3), |(i, j)| {
            ((i * 7 + j * 13) % 17) as f64 / 17.0 - 0.5
        });
        let y = ndarray::Array1::from_shape_fn(257, |i| (i % 3 == 0) as u8 as f64);

        let seq = NewtonStep::sequential(w.view(), b, x.view(), y.view());
        let par = NewtonStep::parallel(w.view(), b, x.view(), y.view());

        for (s, p) in seq.grad_w.iter().zip(&par.grad_w) {
            assert!((s - p).abs() < 1e-9, "{s} != {p}");
        }
        assert!((seq.grad_b - par.grad_b).abs() < 1e-9);
        assert!((seq.curv_w - par.curv_w).abs() < 1e-9);
        assert!((seq.curv_b - par.curv_b).abs() < 1e-9);
    }
}
