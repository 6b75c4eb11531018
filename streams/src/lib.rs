mod error;
mod fifo;

pub use error::StreamErr;
pub use fifo::Stream;
