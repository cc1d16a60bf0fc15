use std::fmt::{self, Display};

use log::{debug, info};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::{Rng, rngs::StdRng};

use super::{FitConfig, FitObserver, LogObserver, NewtonStep};
use crate::{
    LogitErr, Result,
    arch::{DecisionBoundary, classify, mean_nll, nll, score},
    dataset::{self, Dataset},
    initialization::NormalParamGen,
};

/// The outcome of evaluating a fitter over a set of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Mean negative log-likelihood.
    pub loss: f64,
    /// Fraction of misclassified samples, in `[0, 1]`.
    pub error_rate: f64,
    pub errors: usize,
    pub samples: usize,
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loss={:.4} error_rate={:.4} ({}/{})",
            self.loss, self.error_rate, self.errors, self.samples
        )
    }
}

/// Binary logistic regression fitted with damped Newton steps.
///
/// A fitter is either *unloaded* or *loaded*: `load` attaches a dataset, `reset`
/// drops it together with the learned parameters. `loss`, `fit` and `test` need a
/// loaded dataset and fail with `LogitErr::NotLoaded` otherwise.
#[derive(Debug)]
pub struct LogitReg<R: Rng = StdRng> {
    xsize: usize,
    w: Array1<f64>,
    b: f64,
    learning_rate: f64,
    config: FitConfig,
    param_gen: NormalParamGen<R>,
    dataset: Option<Dataset>,
}

impl LogitReg<StdRng> {
    /// Creates a new `LogitReg` with the default configuration and an OS seeded
    /// generator.
    ///
    /// # Arguments
    /// * `xsize` - The amount of features per sample, must be positive.
    pub fn new(xsize: usize) -> Result<Self> {
        Self::with_config(xsize, FitConfig::default())
    }

    /// Creates a new `LogitReg` whose generator is seeded from `config.seed`.
    ///
    /// # Arguments
    /// * `xsize` - The amount of features per sample, must be positive.
    /// * `config` - The fitting settings.
    pub fn with_config(xsize: usize, config: FitConfig) -> Result<Self> {
        let param_gen = NormalParamGen::seeded(config.seed);
        Self::from_param_gen(xsize, config, param_gen)
    }
}

impl<R: Rng> LogitReg<R> {
    /// Creates a new `LogitReg` drawing its parameters from `rng`, `config.seed` is
    /// ignored.
    ///
    /// # Arguments
    /// * `xsize` - The amount of features per sample, must be positive.
    /// * `config` - The fitting settings.
    /// * `rng` - The random number generator used for every parameter draw.
    pub fn from_rng(xsize: usize, config: FitConfig, rng: R) -> Result<Self> {
        Self::from_param_gen(xsize, config, NormalParamGen::new(rng))
    }

    fn from_param_gen(
        xsize: usize,
        config: FitConfig,
        mut param_gen: NormalParamGen<R>,
    ) -> Result<Self> {
        if xsize == 0 {
            return Err(LogitErr::InvalidSize);
        }

        config.validate()?;

        Ok(Self {
            xsize,
            w: param_gen.weights(xsize),
            b: param_gen.scalar(),
            learning_rate: config.learning_rate,
            config,
            param_gen,
            dataset: None,
        })
    }

    /// Attaches a training dataset, replacing any previous one.
    ///
    /// # Arguments
    /// * `x` - The design matrix, one row of `xsize` features per sample.
    /// * `y` - The binary labels.
    pub fn load(&mut self, x: Array2<f64>, y: Array1<f64>) -> Result<()> {
        self.load_dataset(Dataset::new(x, y)?)
    }

    /// Attaches an already validated training dataset, replacing any previous one.
    pub fn load_dataset(&mut self, dataset: Dataset) -> Result<()> {
        if dataset.x_size() != self.xsize {
            return Err(LogitErr::SizeMismatch {
                what: "features",
                got: dataset.x_size(),
                expected: self.xsize,
            });
        }

        debug!("loaded dataset with {} samples", dataset.len());
        self.dataset = Some(dataset);
        Ok(())
    }

    /// Draws new parameters, restores the learning rate and drops the dataset.
    pub fn reset(&mut self) {
        self.w = self.param_gen.weights(self.xsize);
        self.b = self.param_gen.scalar();
        self.learning_rate = self.config.learning_rate;
        self.dataset = None;
        debug!("fitter reset");
    }

    /// Returns the mean negative log-likelihood of the current parameters over the
    /// loaded dataset.
    pub fn loss(&self) -> Result<f64> {
        let dataset = self.loaded()?;
        Ok(mean_nll(self.w.view(), self.b, dataset.x(), dataset.y()))
    }

    /// Fits the parameters to the loaded dataset, reporting progress through the
    /// `log` facade.
    pub fn fit(&mut self) -> Result<()> {
        self.fit_with(&mut LogObserver)
    }

    /// Fits the parameters to the loaded dataset.
    ///
    /// Runs exactly `config.iterations` Newton steps, there is no convergence check.
    /// Whenever a scalar second derivative is exactly zero the matching parameters
    /// are drawn again from the standard normal distribution instead of updated.
    ///
    /// # Arguments
    /// * `observer` - Notified with the initial loss, every `config.report_every`
    ///   iterations and with the final loss.
    pub fn fit_with<O: FitObserver>(&mut self, observer: &mut O) -> Result<()> {
        let dataset = self.dataset.as_ref().ok_or(LogitErr::NotLoaded)?;
        let (x, y) = (dataset.x(), dataset.y());
        let iterations = self.config.iterations.get();
        let report_every = self.config.report_every.get();
        let lr = self.learning_rate;

        info!(
            "fitting {} samples of {} features for {iterations} iterations",
            dataset.len(),
            self.xsize
        );
        observer.on_start(mean_nll(self.w.view(), self.b, x, y));

        for i in 0..iterations {
            let step = if self.config.parallel {
                NewtonStep::parallel(self.w.view(), self.b, x, y)
            } else {
                NewtonStep::sequential(self.w.view(), self.b, x, y)
            };

            if step.curv_w != 0.0 {
                let h = step.curv_w;
                self.w.zip_mut_with(&step.grad_w, |w, &g| *w -= lr * g / h);
            } else {
                debug!(iteration = i; "weights curvature is zero, drawing new weights");
                self.w = self.param_gen.weights(self.xsize);
            }

            if step.curv_b != 0.0 {
                self.b -= lr * step.grad_b / step.curv_b;
            } else {
                debug!(iteration = i; "bias curvature is zero, drawing a new bias");
                self.b = self.param_gen.scalar();
            }

            if i % report_every == 0 {
                observer.on_report(i, mean_nll(self.w.view(), self.b, x, y));
            }
        }

        observer.on_finish(mean_nll(self.w.view(), self.b, x, y));
        Ok(())
    }

    /// Classifies a single sample.
    ///
    /// # Returns
    /// `1` if `w·x + b > 0`, `0` otherwise, or an error if `x` doesn't have `xsize`
    /// features.
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<u8> {
        if x.len() != self.xsize {
            return Err(LogitErr::SizeMismatch {
                what: "input",
                got: x.len(),
                expected: self.xsize,
            });
        }

        Ok(classify(score(self.w.view(), self.b, x)))
    }

    /// Evaluates the current parameters over a possibly held-out set of samples.
    ///
    /// # Arguments
    /// * `x` - The design matrix, one row of `xsize` features per sample.
    /// * `y` - The binary labels.
    pub fn test(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<Evaluation> {
        self.loaded()?;
        dataset::validate(x, y)?;

        if x.ncols() != self.xsize {
            return Err(LogitErr::SizeMismatch {
                what: "features",
                got: x.ncols(),
                expected: self.xsize,
            });
        }

        let mut total = 0.0;
        let mut errors = 0;

        for (x, &y) in x.rows().into_iter().zip(y) {
            let z = score(self.w.view(), self.b, x);
            total += nll(z, y);

            if f64::from(classify(z)) != y {
                errors += 1;
            }
        }

        let samples = y.len();
        Ok(Evaluation {
            loss: total / samples as f64,
            error_rate: errors as f64 / samples as f64,
            errors,
            samples,
        })
    }

    /// Shorthand for `test` over a `Dataset`.
    pub fn evaluate(&self, dataset: &Dataset) -> Result<Evaluation> {
        self.test(dataset.x(), dataset.y())
    }

    /// Returns the separating line of the current parameters, only defined for two
    /// features.
    pub fn boundary(&self) -> Result<DecisionBoundary> {
        DecisionBoundary::new(self.w.view(), self.b)
    }

    pub fn xsize(&self) -> usize {
        self.xsize
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.w.view()
    }

    pub fn bias(&self) -> f64 {
        self.b
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    fn loaded(&self) -> Result<&Dataset> {
        self.dataset.as_ref().ok_or(LogitErr::NotLoaded)
    }
}
