use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::optim::sgd::LEARNING_RATE;

/// Configuration for a `train_neuron` run.
///
/// # Fields
/// - `iterations`    — number of single-sample updates
/// - `sample_range`  — samples are drawn uniformly from indices
///                     `[0, sample_range)`; the default of 7 leaves the
///                     eighth pets sample out of training
/// - `learning_rate` — step size handed to the optimizer
/// - `seed`          — fixed RNG seed; `None` seeds from the wall clock
/// - `log_every`     — emit a debug progress line every N iterations (0 = never)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub iterations: usize,
    pub sample_range: usize,
    pub learning_rate: f64,
    pub seed: Option<u64>,
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 10_000,
            sample_range: 7,
            learning_rate: LEARNING_RATE,
            seed: None,
            log_every: 1_000,
        }
    }
}

impl TrainConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The seed this run will use: the configured one, or the current time
    /// in nanoseconds.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }

    /// Random source for weight initialisation and sample selection.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.resolve_seed())
    }
}
