/// Probability of the positive class for a score `z`.
///
/// The negative branch is evaluated as `exp(z) / (1 + exp(z))` so that `exp` is only
/// ever called on non-positive arguments and never overflows.
pub fn sigmoid(z: f64) -> f64 {
    if z < 0.0 {
        let e = z.exp();
        e / (1.0 + e)
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}
