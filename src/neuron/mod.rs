pub mod neuron;

pub use neuron::{Mode, Neuron, BIAS};
