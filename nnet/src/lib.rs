mod classifier;
mod error;
mod iqconv;
mod layers;

pub use classifier::{Classifier, Inference, NetworkDims, Sample};
pub use error::NnetErr;
pub use iqconv::{IqConv, N_HIDDEN, N_IN, N_LAYER_OUT};
