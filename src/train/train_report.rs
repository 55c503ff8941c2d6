use serde::{Serialize, Deserialize};

/// Summary returned by `train_neuron` once all iterations have run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainReport {
    /// Number of updates applied.
    pub iterations: usize,
    /// Seed used for sample selection, so the run can be repeated.
    pub seed: Option<u64>,
    /// Mean squared error of the logistic output over the whole dataset.
    pub final_loss: f64,
    /// Step-decision accuracy over the samples eligible for training.
    pub train_accuracy: f64,
    /// Step-decision accuracy over every sample, including any never drawn.
    pub dataset_accuracy: f64,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
}
