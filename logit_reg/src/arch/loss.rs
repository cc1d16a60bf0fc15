use ndarray::{ArrayView1, ArrayView2};

use super::score;

/// Negative log-likelihood of a single sample with score `z` and label `y`.
///
/// Evaluated literally as `ln(1 + exp(z)) - y·z`, so a large positive score overflows
/// to `+inf`.
pub fn nll(z: f64, y: f64) -> f64 {
    (1.0 + z.exp()).ln() - y * z
}

/// Mean negative log-likelihood of the parameters `(w, b)` over a set of samples.
///
/// The caller guarantees `x` has as many rows as `y` has labels and that there is at
/// least one of them.
pub fn mean_nll(w: ArrayView1<f64>, b: f64, x: ArrayView2<f64>, y: ArrayView1<f64>) -> f64 {
    let total: f64 = x
        .rows()
        .into_iter()
        .zip(y)
        .map(|(x, &y)| nll(score(w, b, x), y))
        .sum();

    total / y.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn nll_at_zero_score_is_ln2() {
        assert!((nll(0.0, 0.0) - 2f64.ln()).abs() < 1e-15);
        assert!((nll(0.0, 1.0) - 2f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn nll_overflows_on_large_scores() {
        assert_eq!(nll(1000.0, 0.0), f64::INFINITY);
        assert_eq!(nll(1000.0, 1.0), f64::INFINITY);
        assert_eq!(nll(-1000.0, 0.0), 0.0);
        assert_eq!(nll(-1000.0, 1.0), 1000.0);
    }

    #[test]
    fn mean_over_samples() {
        let w = array![1.0, -1.0];
        let x = array![[1.0, 1.0], [2.0, 0.0]];
        let y = array![0.0, 1.0];

        // scores: 0.5, 2.5
        let expected = (nll(0.5, 0.0) + nll(2.5, 1.0)) / 2.0;
        let got = mean_nll(w.view(), 0.5, x.view(), y.view());
        assert!((got - expected).abs() < 1e-15, "{got} != {expected}");
        assert!(got.is_finite());
    }
}
