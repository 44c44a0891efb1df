/// Statistics produced while fitting the rating predictor.
///
/// Fields are private to allow evolving the recorded counters without breaking
/// the public API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitReport {
    observations: usize,
    epoch_rmse: Vec<f32>,
}

impl FitReport {
    /// Creates a new `FitReport`.
    ///
    /// # Args
    /// * `observations` - Number of rating rows seen per epoch.
    /// * `epoch_rmse` - Training RMSE of every epoch, in order.
    pub fn new(observations: usize, epoch_rmse: Vec<f32>) -> Self {
        Self {
            observations,
            epoch_rmse,
        }
    }

    /// Returns the number of rating rows used for fitting.
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Returns the number of completed epochs.
    pub fn epochs(&self) -> usize {
        self.epoch_rmse.len()
    }

    /// Returns the training RMSE of every epoch.
    pub fn epoch_rmse(&self) -> &[f32] {
        &self.epoch_rmse
    }

    /// Returns the training RMSE of the last epoch, if any ran.
    pub fn final_rmse(&self) -> Option<f32> {
        self.epoch_rmse.last().copied()
    }
}
