use ndarray::{Array1, ArrayView1};

use super::{dense::Dense, relu::Relu};

#[derive(Debug)]
pub enum Layer {
    Dense(Dense),
    Relu(Relu),
}

impl Layer {
    pub fn forward(&self, x: ArrayView1<f32>) -> Array1<f32> {
        use Layer::*;
        match self {
            Dense(l) => l.forward(x),
            Relu(l) => l.forward(x),
        }
    }
}
