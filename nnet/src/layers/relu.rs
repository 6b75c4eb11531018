use ndarray::{Array1, ArrayView1};

/// Rectified linear activation.
#[derive(Debug)]
pub struct Relu;

impl Relu {
    pub fn forward(&self, x: ArrayView1<f32>) -> Array1<f32> {
        x.mapv(|z| z.max(0.0))
    }
}
