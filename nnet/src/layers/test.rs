use ndarray::array;

use super::{dense::Dense, layer::Layer, relu::Relu};
use crate::NnetErr;

#[test]
fn dense_applies_weights_and_biases() {
    let d = Dense::new(2, 2, vec![1.0, 0.0, 0.0, 1.0], vec![0.5, -0.5]).unwrap();
    let y = d.forward(array![1.0, 2.0].view());

    assert_eq!(y, array![1.5, 1.5]);
}

#[test]
fn dense_rejects_bad_buffer_sizes() {
    let err = Dense::new(2, 2, vec![0.0; 3], vec![0.0; 2]).unwrap_err();
    assert!(matches!(err, NnetErr::ShapeMismatch { what: "weights", got: 3, expected: 4 }));

    let err = Dense::new(2, 2, vec![0.0; 4], vec![0.0; 3]).unwrap_err();
    assert!(matches!(err, NnetErr::ShapeMismatch { what: "biases", got: 3, expected: 2 }));
}

#[test]
fn relu_clamps_negatives() {
    let y = Relu.forward(array![-1.0, 0.0, 2.5].view());

    assert_eq!(y, array![0.0, 0.0, 2.5]);
}

#[test]
fn layer_dispatches_forward() {
    let net = vec![
        Layer::Dense(Dense::new(2, 3, vec![1.0; 6], vec![0.0; 3]).unwrap()),
        Layer::Relu(Relu),
    ];

    let mut x = array![1.0, -3.0];
    for layer in &net {
        x = layer.forward(x.view());
    }

    assert_eq!(x, array![0.0, 0.0, 0.0]);
}
