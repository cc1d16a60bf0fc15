use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, StandardNormal};

/// A parameter generator that samples from the standard normal distribution using
/// an owned random number generator.
#[derive(Debug, Clone)]
pub struct NormalParamGen<R: Rng> {
    rng: R,
}

impl NormalParamGen<StdRng> {
    /// Creates a new `NormalParamGen` backed by a `StdRng`.
    ///
    /// # Arguments
    /// * `seed` - The seed for the generator, `None` seeds it from the OS.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::new(rng)
    }
}

impl<R: Rng> NormalParamGen<R> {
    /// Creates a new `NormalParamGen`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Samples `n` independent weights.
    pub fn weights(&mut self, n: usize) -> Array1<f64> {
        Array1::random_using(n, StandardNormal, &mut self.rng)
    }

    /// Samples a single scalar, used for the bias.
    pub fn scalar(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}
