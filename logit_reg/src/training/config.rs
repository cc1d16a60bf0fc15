use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::{LogitErr, Result};

const DEFAULT_ITERATIONS: usize = 20_000;
const DEFAULT_REPORT_EVERY: usize = 1_000;
const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Settings of a fitter, fixed for its whole lifetime.
///
/// Every field can be omitted when deserializing, the defaults are the ones used by
/// `LogitReg::new`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FitConfig {
    /// Amount of Newton steps taken by a single `fit` call.
    pub iterations: NonZeroUsize,
    /// Damping factor of every Newton step.
    pub learning_rate: f64,
    /// The observer is notified on every iteration that is a multiple of this.
    pub report_every: NonZeroUsize,
    /// Seed for the parameter generator, `None` seeds it from the OS.
    pub seed: Option<u64>,
    /// Accumulate the per-sample derivatives with rayon.
    pub parallel: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            iterations: NonZeroUsize::new(DEFAULT_ITERATIONS).unwrap(),
            learning_rate: DEFAULT_LEARNING_RATE,
            report_every: NonZeroUsize::new(DEFAULT_REPORT_EVERY).unwrap(),
            seed: None,
            parallel: false,
        }
    }
}

impl FitConfig {
    /// Checks the values that the type system can't.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LogitErr::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FitConfig::default();
        assert_eq!(config.iterations.get(), 20_000);
        assert_eq!(config.report_every.get(), 1_000);
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.seed, None);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: FitConfig =
            serde_json::from_str(r#"{ "iterations": 500, "seed": 3 }"#).unwrap();

        assert_eq!(config.iterations.get(), 500);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.report_every.get(), 1_000);
    }

    #[test]
    fn zero_iterations_do_not_deserialize() {
        assert!(serde_json::from_str::<FitConfig>(r#"{ "iterations": 0 }"#).is_err());
    }

    #[test]
    fn rejects_bad_learning_rate() {
        for learning_rate in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let config = FitConfig {
                learning_rate,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(LogitErr::InvalidConfig(_))));
        }
    }
}
