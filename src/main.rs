// Trains a single neuron on the built-in pets dataset and prints one
// prediction per line. Set RUST_LOG=debug to see training progress on stderr.
use std::error::Error;

use ferrite_perceptron::{train_neuron, Dataset, Label, Neuron, TrainConfig};

const QUERIES: [[f64; 5]; 2] = [
    [1.0, 1.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.0, 1.0],
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = TrainConfig::default();
    let mut rng = config.rng();
    let dataset = Dataset::pets();

    let mut neuron = Neuron::new(dataset.num_features(), &mut rng)?;
    let report = train_neuron(&mut neuron, &dataset, &config, &mut rng)?;
    log::info!("report: {}", serde_json::to_string(&report)?);

    for query in &QUERIES {
        let label = Label::from_decision(neuron.step_activation(query)?)?;
        println!("Prediction: {label}");
    }
    Ok(())
}
