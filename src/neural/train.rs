//! Backpropagation training with mean squared error

use super::matrix::Matrix;
use super::mlp::Mlp;
use super::neuron::sigmoid_prime;
use crate::error::{PrimerError, PrimerResult};
use rand::seq::SliceRandom;
use rand::Rng;

/// Training hyperparameters
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Step size for gradient descent
    pub learning_rate: f64,
    /// Passes over the training set
    pub epochs: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 50,
        }
    }
}

impl TrainConfig {
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    fn validate(&self) -> PrimerResult<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PrimerError::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

/// Mean squared error between a target and an output vector
pub fn mse(target: &[f64], output: &[f64]) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    let sum: f64 = target
        .iter()
        .zip(output)
        .map(|(t, o)| (t - o) * (t - o))
        .sum();
    sum / target.len() as f64
}

/// Gradients of one sample's loss, shaped like the network's parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    /// One matrix per weight matrix
    pub weights: Vec<Matrix>,
    /// One vector per hidden-layer bias; empty for a network without biases
    pub biases: Vec<Vec<f64>>,
}

/// Gradients of `0.5 * |output - target|^2` for one sample, plus the
/// network output
pub fn backpropagate(
    mlp: &Mlp,
    input: &[f64],
    target: &[f64],
) -> PrimerResult<(Gradients, Vec<f64>)> {
    if target.len() != mlp.num_outputs() {
        return Err(PrimerError::shape(
            format!("{} targets", mlp.num_outputs()),
            format!("{} targets", target.len()),
        ));
    }

    let activations = mlp.forward(input)?;
    let output: Vec<f64> = activations
        .last()
        .map(|a| a.as_slice().to_vec())
        .unwrap_or_default();

    let mut error: Vec<f64> = output.iter().zip(target).map(|(o, t)| o - t).collect();
    let mut weights_grad: Vec<Matrix> = Vec::with_capacity(mlp.weights().len());
    let mut biases_grad: Vec<Vec<f64>> = Vec::with_capacity(mlp.biases().len());

    for (i, weights) in mlp.weights().iter().enumerate().rev() {
        let delta: Vec<f64> = error
            .iter()
            .zip(activations[i + 1].as_slice())
            .map(|(e, a)| e * sigmoid_prime(*a))
            .collect();

        weights_grad.push(Matrix::outer(activations[i].as_slice(), &delta));

        error = Matrix::row_vector(&delta)
            .matmul(&weights.transpose())?
            .as_slice()
            .to_vec();

        if i < mlp.biases().len() {
            biases_grad.push(delta);
        }
    }

    weights_grad.reverse();
    biases_grad.reverse();
    let gradients = Gradients {
        weights: weights_grad,
        biases: biases_grad,
    };
    Ok((gradients, output))
}

fn check_dataset(items: &[Vec<f64>], targets: &[Vec<f64>], name: &str) -> PrimerResult<()> {
    if items.len() != targets.len() {
        return Err(PrimerError::shape(
            format!("{} targets", items.len()),
            format!("{} targets", targets.len()),
        ));
    }
    if items.is_empty() {
        return Err(PrimerError::InvalidConfig(format!("{name} set is empty")));
    }
    Ok(())
}

/// One pass of per-sample gradient descent; returns the mean MSE seen
fn train_epoch(
    mlp: &mut Mlp,
    items: &[Vec<f64>],
    targets: &[Vec<f64>],
    learning_rate: f64,
) -> PrimerResult<f64> {
    let mut sum_errors = 0.0;

    for (input, target) in items.iter().zip(targets) {
        let (gradients, output) = backpropagate(mlp, input, target)?;
        sum_errors += mse(target, &output);

        for (weights, gradient) in mlp.weights_mut().iter_mut().zip(&gradients.weights) {
            weights.sub_scaled(gradient, learning_rate)?;
        }
        for (bias, gradient) in mlp.biases_mut().iter_mut().zip(&gradients.biases) {
            for (b, g) in bias.iter_mut().zip(gradient) {
                *b -= learning_rate * g;
            }
        }
    }

    Ok(sum_errors / items.len() as f64)
}

/// Mean MSE of the network over a dataset, without training
pub fn evaluate(mlp: &Mlp, items: &[Vec<f64>], targets: &[Vec<f64>]) -> PrimerResult<f64> {
    check_dataset(items, targets, "evaluation")?;
    let mut sum_errors = 0.0;
    for (input, target) in items.iter().zip(targets) {
        sum_errors += mse(target, &mlp.activate(input)?);
    }
    Ok(sum_errors / items.len() as f64)
}

/// Train with per-sample gradient descent
///
/// Returns the mean MSE over the final epoch.
pub fn train(
    mlp: &mut Mlp,
    items: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> PrimerResult<f64> {
    config.validate()?;
    check_dataset(items, targets, "training")?;

    let mut last_error = 0.0;
    for epoch in 0..config.epochs {
        last_error = train_epoch(mlp, items, targets, config.learning_rate)?;
        tracing::trace!(epoch, error = last_error, "epoch complete");
    }

    tracing::debug!(
        epochs = config.epochs,
        samples = items.len(),
        error = last_error,
        "training finished"
    );
    Ok(last_error)
}

/// A dataset partitioned into training and held-out test samples
#[derive(Debug, Clone, PartialEq)]
pub struct DataSplit {
    pub train_items: Vec<Vec<f64>>,
    pub train_targets: Vec<Vec<f64>>,
    pub test_items: Vec<Vec<f64>>,
    pub test_targets: Vec<Vec<f64>>,
}

/// Shuffle a dataset and hold out `floor(test_ratio * n)` samples for testing
///
/// `test_ratio` must lie strictly between 0 and 1.
pub fn split_data<R: Rng + ?Sized>(
    items: &[Vec<f64>],
    targets: &[Vec<f64>],
    test_ratio: f64,
    rng: &mut R,
) -> PrimerResult<DataSplit> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(PrimerError::InvalidConfig(format!(
            "test ratio must be between 0 and 1, got {test_ratio}"
        )));
    }
    if items.len() != targets.len() {
        return Err(PrimerError::shape(
            format!("{} targets", items.len()),
            format!("{} targets", targets.len()),
        ));
    }

    let n_test = (test_ratio * items.len() as f64) as usize;
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.shuffle(rng);
    let (test, train) = order.split_at(n_test);

    let pick = |indexes: &[usize], from: &[Vec<f64>]| -> Vec<Vec<f64>> {
        indexes.iter().map(|&i| from[i].clone()).collect()
    };
    Ok(DataSplit {
        train_items: pick(train, items),
        train_targets: pick(train, targets),
        test_items: pick(test, items),
        test_targets: pick(test, targets),
    })
}

/// Outcome of [`cross_validation_train`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossValidation {
    /// Mean training MSE of the last epoch run
    pub train_error: f64,
    /// Test MSE of the last epoch before the test error rose
    pub test_error: f64,
    /// Epochs run, counting the one that triggered an early stop
    pub epochs_run: usize,
    pub stopped_early: bool,
}

/// Train on the split's training samples, scoring the test samples after
/// every epoch, and stop as soon as the test error goes up
pub fn cross_validation_train(
    mlp: &mut Mlp,
    split: &DataSplit,
    config: &TrainConfig,
) -> PrimerResult<CrossValidation> {
    config.validate()?;
    check_dataset(&split.train_items, &split.train_targets, "training")?;
    check_dataset(&split.test_items, &split.test_targets, "test")?;

    let mut train_error = evaluate(mlp, &split.train_items, &split.train_targets)?;
    let mut test_error = f64::INFINITY;
    let mut epochs_run = 0;
    let mut stopped_early = false;

    for epoch in 0..config.epochs {
        train_error = train_epoch(
            mlp,
            &split.train_items,
            &split.train_targets,
            config.learning_rate,
        )?;
        let epoch_test_error = evaluate(mlp, &split.test_items, &split.test_targets)?;
        epochs_run = epoch + 1;
        tracing::debug!(
            epoch,
            train_error,
            test_error = epoch_test_error,
            "cross-validation epoch"
        );

        if epoch_test_error > test_error {
            stopped_early = true;
            break;
        }
        test_error = epoch_test_error;
    }

    if epochs_run == 0 {
        test_error = evaluate(mlp, &split.test_items, &split.test_targets)?;
    }
    tracing::debug!(
        epochs_run,
        stopped_early,
        train_error,
        test_error,
        "cross-validation finished"
    );
    Ok(CrossValidation {
        train_error,
        test_error,
        epochs_run,
        stopped_early,
    })
}
