use log::info;

/// Receives the progress of a `fit` call.
///
/// Closures taking `(iteration, loss)` are observers that only care about the
/// periodic reports.
pub trait FitObserver {
    /// Called once with the loss of the starting parameters.
    fn on_start(&mut self, _loss: f64) {}

    /// Called after the update of every reported iteration.
    ///
    /// # Arguments
    /// * `iteration` - The zero based index of the iteration.
    /// * `loss` - The loss of the parameters after that iteration's update.
    fn on_report(&mut self, iteration: usize, loss: f64);

    /// Called once with the loss of the fitted parameters.
    fn on_finish(&mut self, _loss: f64) {}
}

impl<F: FnMut(usize, f64)> FitObserver for F {
    fn on_report(&mut self, iteration: usize, loss: f64) {
        self(iteration, loss)
    }
}

/// Writes the progress of a fit to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl FitObserver for LogObserver {
    fn on_start(&mut self, loss: f64) {
        info!("start learning, initial loss: {loss:.4}");
    }

    fn on_report(&mut self, iteration: usize, loss: f64) {
        info!("step {}: loss={loss:.4}", iteration + 1);
    }

    fn on_finish(&mut self, loss: f64) {
        info!("finished learning, final loss: {loss:.4}");
    }
}

/// Records every loss it is notified of.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LossHistory {
    initial: Option<f64>,
    reports: Vec<(usize, f64)>,
    last: Option<f64>,
}

impl LossHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the loss of the starting parameters, if a fit was observed.
    pub fn initial(&self) -> Option<f64> {
        self.initial
    }

    /// Returns the `(iteration, loss)` reports in the order they arrived.
    pub fn reports(&self) -> &[(usize, f64)] {
        &self.reports
    }

    /// Returns the loss of the fitted parameters, if a fit was observed to the end.
    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

impl FitObserver for LossHistory {
    fn on_start(&mut self, loss: f64) {
        self.initial = Some(loss);
    }

    fn on_report(&mut self, iteration: usize, loss: f64) {
        self.reports.push((iteration, loss));
    }

    fn on_finish(&mut self, loss: f64) {
        self.last = Some(loss);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: FitObserver>(observer: &mut O) {
        observer.on_start(0.9);
        observer.on_report(0, 0.7);
        observer.on_report(10, 0.5);
        observer.on_finish(0.4);
    }

    #[test]
    fn closures_only_see_reports() {
        let mut seen = vec![];
        drive(&mut |iteration: usize, loss: f64| seen.push((iteration, loss)));
        assert_eq!(seen, [(0, 0.7), (10, 0.5)]);
    }

    #[test]
    fn history_records_everything() {
        let mut history = LossHistory::new();
        drive(&mut history);

        assert_eq!(history.initial(), Some(0.9));
        assert_eq!(history.reports(), [(0, 0.7), (10, 0.5)]);
        assert_eq!(history.last(), Some(0.4));
    }
}
