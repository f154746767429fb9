//! Multilayer perceptron: dense layers with sigmoid activation

use super::matrix::Matrix;
use super::neuron::sigmoid;
use crate::error::{PrimerError, PrimerResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fully connected feed-forward network
///
/// `weights[i]` connects layer `i` to layer `i + 1` and has shape
/// `layers[i] x layers[i + 1]`. A network either has no biases or one
/// bias vector per hidden layer: `biases[i]` is added to the net input of
/// layer `i + 1`. The output layer never has a bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MlpData")]
pub struct Mlp {
    layers: Vec<usize>,
    weights: Vec<Matrix>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    biases: Vec<Vec<f64>>,
}

/// Serialized form of [`Mlp`], checked by [`Mlp::from_weights`] and
/// [`Mlp::with_biases`]
#[derive(Deserialize)]
struct MlpData {
    layers: Vec<usize>,
    weights: Vec<Matrix>,
    #[serde(default)]
    biases: Vec<Vec<f64>>,
}

impl TryFrom<MlpData> for Mlp {
    type Error = PrimerError;

    fn try_from(raw: MlpData) -> PrimerResult<Self> {
        let mlp = Mlp::from_weights(raw.weights)?.with_biases(raw.biases)?;
        if mlp.layers != raw.layers {
            return Err(PrimerError::InvalidTopology(format!(
                "layers {:?} do not match weight shapes {:?}",
                raw.layers, mlp.layers
            )));
        }
        Ok(mlp)
    }
}

fn topology(inputs: usize, hidden: &[usize], outputs: usize) -> PrimerResult<Vec<usize>> {
    let mut layers = Vec::with_capacity(hidden.len() + 2);
    layers.push(inputs);
    layers.extend_from_slice(hidden);
    layers.push(outputs);

    if let Some(i) = layers.iter().position(|&n| n == 0) {
        return Err(PrimerError::InvalidTopology(format!(
            "layer {i} has no neurons"
        )));
    }
    Ok(layers)
}

impl Mlp {
    /// Create a network with uniformly random weights in [0, 1) and no biases
    pub fn new<R: Rng + ?Sized>(
        inputs: usize,
        hidden: &[usize],
        outputs: usize,
        rng: &mut R,
    ) -> PrimerResult<Self> {
        let layers = topology(inputs, hidden, outputs)?;
        let weights = layers
            .windows(2)
            .map(|pair| Matrix::random(pair[0], pair[1], rng))
            .collect();

        Ok(Self {
            layers,
            weights,
            biases: Vec::new(),
        })
    }

    /// Like [`new`](Self::new), adding a bias to every hidden neuron
    ///
    /// Biases start uniformly random in [-1, 1).
    pub fn with_bias<R: Rng + ?Sized>(
        inputs: usize,
        hidden: &[usize],
        outputs: usize,
        rng: &mut R,
    ) -> PrimerResult<Self> {
        let mut mlp = Self::new(inputs, hidden, outputs, rng)?;
        mlp.biases = hidden
            .iter()
            .map(|&n| (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect())
            .collect();
        Ok(mlp)
    }

    /// Create a network from explicit weight matrices, without biases
    pub fn from_weights(weights: Vec<Matrix>) -> PrimerResult<Self> {
        let Some(first) = weights.first() else {
            return Err(PrimerError::InvalidTopology(
                "a network needs at least one weight matrix".to_string(),
            ));
        };

        let mut layers = vec![first.rows()];
        for (i, w) in weights.iter().enumerate() {
            let previous = layers[layers.len() - 1];
            if w.rows() != previous {
                return Err(PrimerError::InvalidTopology(format!(
                    "weight matrix {i} has {} rows, previous layer has {previous} neurons",
                    w.rows()
                )));
            }
            if w.cols() == 0 {
                return Err(PrimerError::InvalidTopology(format!(
                    "weight matrix {i} has no columns"
                )));
            }
            layers.push(w.cols());
        }
        if layers[0] == 0 {
            return Err(PrimerError::InvalidTopology(
                "input layer has no neurons".to_string(),
            ));
        }

        Ok(Self {
            layers,
            weights,
            biases: Vec::new(),
        })
    }

    /// Replace the biases: empty, or one vector per hidden layer
    pub fn with_biases(mut self, biases: Vec<Vec<f64>>) -> PrimerResult<Self> {
        if !biases.is_empty() {
            let hidden = &self.layers[1..self.layers.len() - 1];
            if biases.len() != hidden.len() {
                return Err(PrimerError::InvalidTopology(format!(
                    "{} bias vectors for {} hidden layers",
                    biases.len(),
                    hidden.len()
                )));
            }
            for (i, (bias, &neurons)) in biases.iter().zip(hidden).enumerate() {
                if bias.len() != neurons {
                    return Err(PrimerError::shape(
                        format!("{neurons} biases for hidden layer {i}"),
                        format!("{} biases", bias.len()),
                    ));
                }
            }
        }
        self.biases = biases;
        Ok(self)
    }

    /// Neurons per layer, input first
    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub(super) fn weights_mut(&mut self) -> &mut [Matrix] {
        &mut self.weights
    }

    /// Hidden-layer biases; empty for a network without them
    pub fn biases(&self) -> &[Vec<f64>] {
        &self.biases
    }

    pub(super) fn biases_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.biases
    }

    pub fn has_bias(&self) -> bool {
        !self.biases.is_empty()
    }

    pub fn num_inputs(&self) -> usize {
        self.layers[0]
    }

    pub fn num_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1]
    }

    /// Number of trainable weights and biases
    pub fn parameter_count(&self) -> usize {
        let weights: usize = self.layers.windows(2).map(|pair| pair[0] * pair[1]).sum();
        weights + self.biases.iter().map(Vec::len).sum::<usize>()
    }

    /// Forward pass returning the output layer's activation
    pub fn activate(&self, inputs: &[f64]) -> PrimerResult<Vec<f64>> {
        let activations = self.forward(inputs)?;
        Ok(activations
            .last()
            .map(|a| a.as_slice().to_vec())
            .unwrap_or_default())
    }

    /// Forward pass keeping every layer's activation (input included)
    pub(super) fn forward(&self, inputs: &[f64]) -> PrimerResult<Vec<Matrix>> {
        if inputs.len() != self.num_inputs() {
            return Err(PrimerError::shape(
                format!("{} inputs", self.num_inputs()),
                format!("{} inputs", inputs.len()),
            ));
        }

        let mut activations = Vec::with_capacity(self.layers.len());
        let mut activation = Matrix::row_vector(inputs);
        for (i, w) in self.weights.iter().enumerate() {
            let mut net = activation.matmul(w)?;
            if let Some(bias) = self.biases.get(i) {
                let shifted: Vec<f64> =
                    net.as_slice().iter().zip(bias).map(|(x, b)| x + b).collect();
                net = Matrix::row_vector(&shifted);
            }
            let next = net.map(sigmoid);
            activations.push(activation);
            activation = next;
        }
        activations.push(activation);
        Ok(activations)
    }
}

/// Trainable parameters of a network with the given layer sizes
pub fn parameter_count(inputs: usize, hidden: &[usize], outputs: usize) -> usize {
    let mut layers = vec![inputs];
    layers.extend_from_slice(hidden);
    layers.push(outputs);
    layers.windows(2).map(|pair| pair[0] * pair[1]).sum()
}
