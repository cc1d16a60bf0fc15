mod config;
mod fitter;
mod newton;
mod observer;

pub use config::FitConfig;
pub use fitter::{Evaluation, LogitReg};
pub use newton::NewtonStep;
pub use observer::{FitObserver, LogObserver, LossHistory};
