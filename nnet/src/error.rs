use std::{error::Error, fmt};

use streams::StreamErr;

/// Errors produced by classifier implementations when inputs are invalid.
#[derive(Debug)]
pub enum NnetErr {
    /// An input stream ran out of samples before the network was fed.
    Starved(StreamErr),

    /// A shape invariant was violated (e.g. mismatched buffer lengths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "weights").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },
}

impl fmt::Display for NnetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NnetErr::Starved(e) => write!(f, "input stream starved: {e}"),
            NnetErr::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
        }
    }
}

impl Error for NnetErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NnetErr::Starved(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StreamErr> for NnetErr {
    fn from(value: StreamErr) -> Self {
        Self::Starved(value)
    }
}
