mod boundary;
mod loss;
mod sigmoid;

pub use boundary::DecisionBoundary;
pub use loss::{mean_nll, nll};
pub use sigmoid::sigmoid;

use ndarray::ArrayView1;

/// The linear score `w·x + b` of a sample.
pub fn score(w: ArrayView1<f64>, b: f64, x: ArrayView1<f64>) -> f64 {
    w.dot(&x) + b
}

/// Thresholds a score, a sample is positive only when its score is strictly greater
/// than zero.
pub fn classify(score: f64) -> u8 {
    if score > 0.0 { 1 } else { 0 }
}
