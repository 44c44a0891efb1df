use ndarray::{ArrayView1, ArrayViewMut1};

use super::Optimizer;

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    /// Makes a step of length `learning_rate` in the opposite direction of the gradient.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient used for taking the step.
    fn update_params(&mut self, mut params: ArrayViewMut1<f32>, grad: ArrayView1<f32>) {
        params.scaled_add(-self.learning_rate, &grad);
    }
}
