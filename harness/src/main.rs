use std::{io, process::ExitCode};

use log::{error, info};

use harness::{error::Result, report::report, stimulus, HarnessConfig};
use nnet::{Classifier, IqConv};

fn main() -> ExitCode {
    env_logger::init();

    match run(HarnessConfig::default()) {
        Ok(mismatches) => ExitCode::from(mismatches as u8),
        Err(e) => {
            error!("harness run failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: HarnessConfig) -> Result<usize> {
    // Modulation recognition example, driven with the ramp stimulus.
    let (data_i, data_q) = stimulus::ramp(cfg.samples_in());
    info!("generated {} samples per channel", cfg.samples_in());

    let network = IqConv::untrained();
    let inference = network.classify(data_i, data_q)?;

    let mut out = io::stdout().lock();
    report(&mut out, inference, cfg.rows_out())
}
