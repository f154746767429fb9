//! Neurons, multilayer perceptrons and backpropagation
//!
//! Activations flow as row vectors: `a_{i+1} = sigmoid(a_i · W_i)`.

mod matrix;
mod mlp;
mod neuron;
mod train;

pub use matrix::Matrix;
pub use mlp::{parameter_count, Mlp};
pub use neuron::{sigmoid, sigmoid_prime, Neuron};
pub use train::{
    backpropagate, cross_validation_train, evaluate, mse, split_data, train, CrossValidation,
    DataSplit, Gradients, TrainConfig,
};

/// Training data for the `1 - x` regression toy
pub fn one_minus_x_dataset(n: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let items: Vec<Vec<f64>> = (0..n).map(|x| vec![x as f64 / n.max(1) as f64]).collect();
    let targets = items.iter().map(|x| vec![1.0 - x[0]]).collect();
    (items, targets)
}
