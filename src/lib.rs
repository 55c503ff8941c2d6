pub mod error;
pub mod activation;
pub mod neuron;
pub mod optim;
pub mod loss;
pub mod dataset;
pub mod train;

// Convenience re-exports
pub use error::{NeuronError, Result};
pub use activation::activation::{ActivationFunction, Evaluation};
pub use neuron::neuron::{Mode, Neuron};
pub use optim::sgd::Sgd;
pub use loss::mse::MseLoss;
pub use dataset::dataset::{Dataset, Label, Sample};
pub use train::{train_neuron, TrainConfig, TrainReport};
