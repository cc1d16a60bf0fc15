//! Binary logistic regression fitted with a damped, scalarized Newton method.

pub mod arch;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod training;

pub use dataset::Dataset;
pub use error::{ErrorKind, LogitErr, Result};
pub use training::{Evaluation, FitConfig, FitObserver, LogObserver, LogitReg, LossHistory};
