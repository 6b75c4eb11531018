use std::{error::Error, fmt, io};

use nnet::NnetErr;
use streams::StreamErr;

/// The harness module's result type.
pub type Result<T> = std::result::Result<T, HarnessErr>;

/// Driver runtime failures.
#[derive(Debug)]
pub enum HarnessErr {
    Io(io::Error),
    Classify(NnetErr),
    ResultsExhausted {
        row: usize,
        source: StreamErr,
    },
}

impl fmt::Display for HarnessErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessErr::Io(e) => write!(f, "io error: {e}"),
            HarnessErr::Classify(e) => write!(f, "classification failed: {e}"),
            HarnessErr::ResultsExhausted { row, .. } => {
                write!(f, "result stream exhausted at row {row}")
            }
        }
    }
}

impl Error for HarnessErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HarnessErr::Io(e) => Some(e),
            HarnessErr::Classify(e) => Some(e),
            HarnessErr::ResultsExhausted { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for HarnessErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<NnetErr> for HarnessErr {
    fn from(value: NnetErr) -> Self {
        Self::Classify(value)
    }
}
