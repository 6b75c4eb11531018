use ndarray::{Array1, Array2, ArrayView1};

use crate::NnetErr;

/// A fully connected layer owning its weights and biases.
///
/// Weights are stored row-major, one row per output neuron.
#[derive(Debug)]
pub struct Dense {
    weights: Array2<f32>,
    biases: Array1<f32>,
}

impl Dense {
    pub fn new(
        dim_in: usize,
        dim_out: usize,
        weights_raw: Vec<f32>,
        biases_raw: Vec<f32>,
    ) -> Result<Self, NnetErr> {
        let got_w = weights_raw.len();
        let weights = Array2::from_shape_vec((dim_out, dim_in), weights_raw).map_err(|_| {
            NnetErr::ShapeMismatch {
                what: "weights",
                got: got_w,
                expected: dim_in * dim_out,
            }
        })?;

        let got_b = biases_raw.len();
        let biases =
            Array1::from_shape_vec(dim_out, biases_raw).map_err(|_| NnetErr::ShapeMismatch {
                what: "biases",
                got: got_b,
                expected: dim_out,
            })?;

        Ok(Self { weights, biases })
    }

    /// Builds the zero-parameter layer of the given dimensions.
    pub fn zeros(dim_in: usize, dim_out: usize) -> Self {
        Self {
            weights: Array2::zeros((dim_out, dim_in)),
            biases: Array1::zeros(dim_out),
        }
    }

    pub fn forward(&self, x: ArrayView1<f32>) -> Array1<f32> {
        self.weights.dot(&x) + &self.biases
    }
}
