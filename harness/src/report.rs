use std::io::Write;

use log::debug;
use nnet::Inference;

use crate::error::{HarnessErr, Result};

/// Reads `rows_out` values off the result stream, printing one line per
/// row bracketed by the discovered network size and a trailing marker.
///
/// Returns the mismatch count against reference data. No reference
/// vector is wired in, so the count stays at zero.
// TODO: capture an answer vector from a trained model run and compare
// each row against it here.
pub fn report<W: Write>(out: &mut W, inference: Inference, rows_out: usize) -> Result<usize> {
    let Inference { mut results, dims } = inference;

    writeln!(out, "Found network size: {}x{}", dims.size_in, dims.size_out)?;

    let mismatches = 0;
    for ii in 0..rows_out {
        for jj in 0..1 {
            let curr_data = results
                .read()
                .map_err(|source| HarnessErr::ResultsExhausted { row: ii, source })?;
            writeln!(out, "Row/Chan: {ii}/{jj}: {curr_data}")?;
        }
    }

    writeln!(out, "Done read")?;
    debug!("reported {rows_out} rows, {mismatches} mismatches");

    Ok(mismatches)
}
