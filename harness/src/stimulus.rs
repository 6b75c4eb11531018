use nnet::Sample;
use streams::Stream;

/// Fills the two input channels with the deterministic ramp the
/// modulation recognition examples use as stimulus.
///
/// Sample `k` carries `0.01 * k` on I and `0.01 * k + 0.005` on Q.
pub fn ramp(n: usize) -> (Stream<Sample>, Stream<Sample>) {
    let mut data_i = Stream::new();
    let mut data_q = Stream::new();

    for k in 0..n {
        data_i.write(0.01 * k as f32);
        data_q.write(0.01 * k as f32 + 0.005);
    }

    (data_i, data_q)
}
