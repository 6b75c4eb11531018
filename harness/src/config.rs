use nnet::{N_IN, N_LAYER_OUT};

/// Immutable bounds for one driver run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    samples_in: usize,
    rows_out: usize,
}

impl HarnessConfig {
    /// Creates a new harness configuration.
    ///
    /// # Args
    /// * `samples_in` - Number of stimulus samples to generate per channel.
    /// * `rows_out` - Number of result rows to read back.
    ///
    /// # Returns
    /// A `HarnessConfig` instance.
    pub fn new(samples_in: usize, rows_out: usize) -> Self {
        Self {
            samples_in,
            rows_out,
        }
    }

    /// Returns the number of stimulus samples per channel.
    pub fn samples_in(&self) -> usize {
        self.samples_in
    }

    /// Returns the number of result rows to read.
    pub fn rows_out(&self) -> usize {
        self.rows_out
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(N_IN, N_LAYER_OUT)
    }
}
