use streams::Stream;

use crate::NnetErr;

/// One sample of an I or Q signal channel.
pub type Sample = f32;

/// Input/output dimensions a network reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDims {
    pub size_in: u16,
    pub size_out: u16,
}

/// Everything one classification pass produces: the result stream plus
/// the dimensions the network discovered about itself.
#[derive(Debug)]
pub struct Inference {
    pub results: Stream<Sample>,
    pub dims: NetworkDims,
}

/// A modulation classifier consuming one window of I/Q samples.
///
/// The driver talks to the unit under test through this boundary only.
/// It does not define how the classification itself is computed.
pub trait Classifier {
    /// Runs one classification pass over the two input channels.
    ///
    /// Both streams are consumed by the call; each sample is read exactly
    /// once, in insertion order.
    ///
    /// # Errors
    /// Returns `NnetErr` when an input stream holds too few samples or an
    /// internal shape invariant is violated.
    fn classify(
        &self,
        data_i: Stream<Sample>,
        data_q: Stream<Sample>,
    ) -> Result<Inference, NnetErr>;
}
