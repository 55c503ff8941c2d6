use rand::Rng;

use crate::activation::activation::{
    continuous_activation, sigmoid_derivative_from_output, step_activation, ActivationFunction,
    Evaluation,
};
use crate::error::{NeuronError, Result};
use crate::optim::sgd::Sgd;

/// Fixed bias scalar. It scales every weight update and is never trained.
pub const BIAS: f64 = 0.1;

/// Which forward pass to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Logistic output, used while learning.
    Training,
    /// Step decision, used for predictions.
    Inference,
}

impl Mode {
    pub fn activation(self) -> ActivationFunction {
        match self {
            Mode::Training => ActivationFunction::Sigmoid,
            Mode::Inference => ActivationFunction::Step,
        }
    }
}

/// A single logistic unit.
///
/// `weights[0]` is the bias weight; `weights[i + 1]` pairs with input `i`.
/// The weight vector is sized once at construction and never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
}

impl Neuron {
    /// Builds a neuron for `num_features` inputs with random weights in [-1, 1).
    pub fn new<R: Rng>(num_features: usize, rng: &mut R) -> Result<Neuron> {
        Neuron::with_bias(num_features, BIAS, rng)
    }

    pub fn with_bias<R: Rng>(num_features: usize, bias: f64, rng: &mut R) -> Result<Neuron> {
        let slots = num_features
            .checked_add(1)
            .ok_or(NeuronError::Allocation { requested: usize::MAX })?;

        let mut weights = Vec::new();
        weights
            .try_reserve_exact(slots)
            .map_err(|_| NeuronError::Allocation { requested: slots })?;
        weights.resize(slots, 0.0);

        let mut neuron = Neuron { weights, bias };
        neuron.initialize_weights(rng);
        Ok(neuron)
    }

    /// Builds a neuron from explicit weights. `weights[0]` is the bias weight,
    /// so the vector must hold at least one value.
    pub fn from_weights(weights: Vec<f64>, bias: f64) -> Result<Neuron> {
        if weights.is_empty() {
            return Err(NeuronError::InvalidInput { expected: 1, actual: 0 });
        }
        Ok(Neuron { weights, bias })
    }

    /// Redraws every slot, bias weight included, uniformly from [-1, 1).
    pub fn initialize_weights<R: Rng>(&mut self, rng: &mut R) {
        for w in self.weights.iter_mut() {
            *w = rng.gen::<f64>() * 2.0 - 1.0;
        }
    }

    pub fn num_features(&self) -> usize {
        self.weights.len() - 1
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// `weights[0] + Σ inputs[i] * weights[i + 1]`.
    pub fn weighted_sum(&self, inputs: &[f64]) -> Result<f64> {
        self.check_inputs(inputs)?;
        let sum = self.weights[1..]
            .iter()
            .zip(inputs.iter())
            .fold(self.weights[0], |acc, (w, x)| acc + x * w);
        Ok(sum)
    }

    /// Training-mode forward pass: logistic output in (0, 1).
    pub fn continuous_activation(&self, inputs: &[f64]) -> Result<f64> {
        Ok(continuous_activation(self.weighted_sum(inputs)?))
    }

    /// Inference-mode forward pass: `1` if the weighted sum is non-negative, else `0`.
    pub fn step_activation(&self, inputs: &[f64]) -> Result<u8> {
        Ok(step_activation(self.weighted_sum(inputs)?))
    }

    pub fn evaluate(&self, inputs: &[f64], mode: Mode) -> Result<Evaluation> {
        Ok(mode.activation().apply(self.weighted_sum(inputs)?))
    }

    /// One online update towards `target` with the default learning rate.
    pub fn train_step(&mut self, inputs: &[f64], target: u8) -> Result<()> {
        self.train_step_with(&Sgd::default(), inputs, target)
    }

    pub fn train_step_with(&mut self, optimizer: &Sgd, inputs: &[f64], target: u8) -> Result<()> {
        if target > 1 {
            return Err(NeuronError::InvalidTarget(target));
        }
        let predicted = self.continuous_activation(inputs)?;
        let error = f64::from(target) - predicted;
        let delta = error * sigmoid_derivative_from_output(predicted);

        optimizer.step(self, delta, inputs)
    }

    /// Applies a precomputed learning signal. Nothing is written unless
    /// `inputs` matches `num_features`.
    pub(crate) fn apply_delta(&mut self, delta: f64, inputs: &[f64], lr: f64) -> Result<()> {
        self.check_inputs(inputs)?;
        let scale = delta * self.bias * lr;
        self.weights[0] += scale;
        for (w, x) in self.weights[1..].iter_mut().zip(inputs.iter()) {
            *w += scale * x;
        }
        Ok(())
    }

    fn check_inputs(&self, inputs: &[f64]) -> Result<()> {
        let expected = self.num_features();
        if inputs.len() != expected {
            return Err(NeuronError::InvalidInput { expected, actual: inputs.len() });
        }
        Ok(())
    }
}
