use ndarray::{ArrayView1, ArrayViewMut1};

/// A learning rule that moves parameters against their gradient.
pub trait Optimizer {
    fn update_params(&mut self, params: ArrayViewMut1<f32>, grad: ArrayView1<f32>);
}
