use crate::error::Result;
use crate::neuron::neuron::Neuron;

/// Learning rate used by `Neuron::train_step`.
pub const LEARNING_RATE: f64 = 0.9;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to a neuron given its learning signal `delta`.
    ///
    /// Every weight moves by `delta * input * bias * learning_rate`, with the
    /// bias weight treated as having a constant input of 1. An input vector
    /// of the wrong width is rejected before any weight changes.
    pub fn step(&self, neuron: &mut Neuron, delta: f64, inputs: &[f64]) -> Result<()> {
        neuron.apply_delta(delta, inputs, self.learning_rate)
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(LEARNING_RATE)
    }
}
