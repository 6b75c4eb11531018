use nnet::{Classifier, IqConv, NnetErr, N_HIDDEN, N_IN, N_LAYER_OUT};
use streams::Stream;

fn window() -> (Stream<f32>, Stream<f32>) {
    let mut data_i = Stream::new();
    let mut data_q = Stream::new();
    for k in 0..N_IN {
        data_i.write(0.01 * k as f32);
        data_q.write(0.01 * k as f32 + 0.005);
    }

    (data_i, data_q)
}

#[test]
fn untrained_reports_dims_and_zero_rows() {
    let (data_i, data_q) = window();

    let mut inference = IqConv::untrained().classify(data_i, data_q).unwrap();

    assert_eq!(inference.dims.size_in, (2 * N_IN) as u16);
    assert_eq!(inference.dims.size_out, N_LAYER_OUT as u16);
    assert_eq!(inference.results.len(), N_LAYER_OUT);
    for _ in 0..N_LAYER_OUT {
        assert_eq!(inference.results.read(), Ok(0.0));
    }
}

#[test]
fn short_input_is_starved() {
    let data_i: Stream<f32> = (0..N_IN - 1).map(|k| k as f32).collect();
    let data_q: Stream<f32> = (0..N_IN).map(|k| k as f32).collect();

    let err = IqConv::untrained().classify(data_i, data_q).unwrap_err();
    assert!(matches!(err, NnetErr::Starved(_)));
}

#[test]
fn from_weights_checks_shapes() {
    let err = IqConv::from_weights(
        vec![0.0; 3],
        vec![0.0; N_HIDDEN],
        vec![0.0; N_HIDDEN * N_LAYER_OUT],
        vec![0.0; N_LAYER_OUT],
    )
    .unwrap_err();

    assert!(matches!(err, NnetErr::ShapeMismatch { what: "weights", .. }));
}

#[test]
fn biases_propagate_through_the_net() {
    // Zero weights everywhere, unit hidden biases: every hidden neuron
    // settles at relu(1.0), and each output row sums those activations.
    let net = IqConv::from_weights(
        vec![0.0; 2 * N_IN * N_HIDDEN],
        vec![1.0; N_HIDDEN],
        vec![1.0; N_HIDDEN * N_LAYER_OUT],
        vec![0.5; N_LAYER_OUT],
    )
    .unwrap();

    let (data_i, data_q) = window();
    let mut inference = net.classify(data_i, data_q).unwrap();

    for _ in 0..N_LAYER_OUT {
        assert_eq!(inference.results.read(), Ok(N_HIDDEN as f32 + 0.5));
    }
}
