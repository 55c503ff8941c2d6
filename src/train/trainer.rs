use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::{
    dataset::dataset::{accuracy, Dataset},
    error::{NeuronError, Result},
    loss::mse::MseLoss,
    neuron::neuron::Neuron,
    optim::sgd::Sgd,
    train::{train_config::TrainConfig, train_report::TrainReport},
};

/// Trains `neuron` online for `config.iterations` steps.
///
/// Each step draws one sample index uniformly from `[0, config.sample_range)`
/// and applies a single update towards that sample's label. Samples at or
/// beyond `sample_range` are never trained on.
///
/// # Errors
/// - `InvalidConfig` if `sample_range` is zero or exceeds the dataset size
/// - `InvalidInput` if the dataset width differs from the neuron's
pub fn train_neuron<R: Rng>(
    neuron: &mut Neuron,
    dataset: &Dataset,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainReport> {
    if config.sample_range == 0 || config.sample_range > dataset.len() {
        return Err(NeuronError::InvalidConfig(format!(
            "sample_range must be in 1..={}, got {}",
            dataset.len(),
            config.sample_range
        )));
    }
    if dataset.num_features() != neuron.num_features() {
        return Err(NeuronError::InvalidInput {
            expected: neuron.num_features(),
            actual: dataset.num_features(),
        });
    }

    let optimizer = Sgd::new(config.learning_rate);
    let samples = dataset.samples();
    let t_start = Instant::now();

    for step in 1..=config.iterations {
        let sample = &samples[rng.gen_range(0..config.sample_range)];
        neuron.train_step_with(&optimizer, &sample.features, sample.label.target())?;

        if config.log_every > 0 && step % config.log_every == 0 {
            debug!("step {step}/{}: loss = {:.6}", config.iterations, dataset_loss(neuron, dataset)?);
        }
    }

    let report = TrainReport {
        iterations: config.iterations,
        seed: config.seed,
        final_loss: dataset_loss(neuron, dataset)?,
        train_accuracy: accuracy(neuron, &samples[..config.sample_range])?,
        dataset_accuracy: accuracy(neuron, samples)?,
        elapsed_ms: t_start.elapsed().as_millis() as u64,
    };
    info!(
        "trained {} steps: loss = {:.6}, train accuracy = {:.3}",
        report.iterations, report.final_loss, report.train_accuracy
    );
    Ok(report)
}

/// MSE between the logistic output and the label over every sample.
fn dataset_loss(neuron: &Neuron, dataset: &Dataset) -> Result<f64> {
    let mut predicted = Vec::with_capacity(dataset.len());
    let mut expected = Vec::with_capacity(dataset.len());
    for sample in dataset.samples() {
        predicted.push(neuron.continuous_activation(&sample.features)?);
        expected.push(f64::from(sample.label.target()));
    }
    Ok(MseLoss::loss(&predicted, &expected))
}
