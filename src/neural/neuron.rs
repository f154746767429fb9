//! Sigmoid activation and the single artificial neuron

use crate::error::{PrimerError, PrimerResult};
use serde::{Deserialize, Serialize};

/// Logistic function 1 / (1 + e^-x)
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid, expressed in terms of its output `a`
pub fn sigmoid_prime(a: f64) -> f64 {
    a * (1.0 - a)
}

/// A single neuron: sigmoid of the weighted input sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
}

impl Neuron {
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// f(x_1*w_1 + ... + x_k*w_k) with f the sigmoid
    pub fn activate(&self, inputs: &[f64]) -> PrimerResult<f64> {
        if inputs.len() != self.weights.len() {
            return Err(PrimerError::shape(
                format!("{} inputs", self.weights.len()),
                format!("{} inputs", inputs.len()),
            ));
        }
        let sum: f64 = inputs.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
        Ok(sigmoid(sum))
    }
}
