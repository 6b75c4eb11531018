use log::debug;
use ndarray::Array1;
use streams::Stream;

use crate::{
    classifier::{Classifier, Inference, NetworkDims, Sample},
    layers::{Dense, Layer, Relu},
    NnetErr,
};

/// Number of I/Q sample pairs in one classification window.
pub const N_IN: usize = 128;

/// Width of the hidden layer.
pub const N_HIDDEN: usize = 32;

/// Number of result rows, one score per modulation class.
pub const N_LAYER_OUT: usize = 11;

/// The example I/Q classification network: a small feedforward net over
/// one interleaved window of I/Q samples.
///
/// Parameters come from the caller; `untrained` builds the all-zero
/// network the driver falls back to when no trained weights are at hand.
#[derive(Debug)]
pub struct IqConv {
    net: Vec<Layer>,
    dims: NetworkDims,
}

impl IqConv {
    /// Builds the network from raw parameter buffers.
    ///
    /// # Args
    /// * `w1`, `b1` - Hidden dense layer, `2 * N_IN` inputs to `N_HIDDEN`.
    /// * `w2`, `b2` - Output dense layer, `N_HIDDEN` to `N_LAYER_OUT`.
    ///
    /// # Errors
    /// Returns `NnetErr::ShapeMismatch` when a buffer does not match its
    /// layer dimensions.
    pub fn from_weights(
        w1: Vec<f32>,
        b1: Vec<f32>,
        w2: Vec<f32>,
        b2: Vec<f32>,
    ) -> Result<Self, NnetErr> {
        let net = vec![
            Layer::Dense(Dense::new(2 * N_IN, N_HIDDEN, w1, b1)?),
            Layer::Relu(Relu),
            Layer::Dense(Dense::new(N_HIDDEN, N_LAYER_OUT, w2, b2)?),
        ];

        Ok(Self {
            net,
            dims: Self::network_dims(),
        })
    }

    /// Builds the zero-parameter network. Every result row is 0.0.
    pub fn untrained() -> Self {
        Self {
            net: vec![
                Layer::Dense(Dense::zeros(2 * N_IN, N_HIDDEN)),
                Layer::Relu(Relu),
                Layer::Dense(Dense::zeros(N_HIDDEN, N_LAYER_OUT)),
            ],
            dims: Self::network_dims(),
        }
    }

    fn network_dims() -> NetworkDims {
        NetworkDims {
            size_in: (2 * N_IN) as u16,
            size_out: N_LAYER_OUT as u16,
        }
    }

    /// Drains one window off the input channels, interleaving I and Q
    /// into the feature vector the first layer expects.
    fn read_window(
        mut data_i: Stream<Sample>,
        mut data_q: Stream<Sample>,
    ) -> Result<Array1<f32>, NnetErr> {
        let mut window = Array1::zeros(2 * N_IN);
        for k in 0..N_IN {
            window[2 * k] = data_i.read()?;
            window[2 * k + 1] = data_q.read()?;
        }

        Ok(window)
    }
}

impl Classifier for IqConv {
    fn classify(
        &self,
        data_i: Stream<Sample>,
        data_q: Stream<Sample>,
    ) -> Result<Inference, NnetErr> {
        let mut x = Self::read_window(data_i, data_q)?;
        debug!("windowed {} input samples", x.len());

        for layer in &self.net {
            x = layer.forward(x.view());
        }

        Ok(Inference {
            results: x.iter().copied().collect(),
            dims: self.dims,
        })
    }
}
