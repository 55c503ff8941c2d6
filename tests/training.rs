use ferrite_perceptron::{
    train_neuron, Dataset, Evaluation, Label, Mode, Neuron, NeuronError, TrainConfig,
};

fn trained(seed: u64) -> Neuron {
    trained_on(&Dataset::pets(), &TrainConfig::default().with_seed(seed))
}

#[test]
fn seed_42_end_to_end_predicts_dog_then_cat() {
    let neuron = trained(42);
    let queries = [[1.0, 1.0, 0.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0, 1.0]];
    let decisions: Vec<Evaluation> = queries
        .iter()
        .map(|q| neuron.evaluate(q, Mode::Inference).unwrap())
        .collect();
    assert_eq!(decisions, vec![Evaluation::Decision(0), Evaluation::Decision(1)]);

    let labels: Vec<Label> = queries
        .iter()
        .map(|q| Label::from_decision(neuron.step_activation(q).unwrap()).unwrap())
        .collect();
    assert_eq!(labels, vec![Label::Dog, Label::Cat]);
}

#[test]
fn fixed_seed_runs_are_bit_identical() {
    assert_eq!(trained(42).weights(), trained(42).weights());
}

#[test]
fn trained_cats_score_higher_than_trained_dogs() {
    let neuron = trained(42);
    let dataset = Dataset::pets();
    let mean = |label: Label| {
        let outputs: Vec<f64> = dataset.samples()[..7]
            .iter()
            .filter(|s| s.label == label)
            .map(|s| neuron.continuous_activation(&s.features).unwrap())
            .collect();
        outputs.iter().sum::<f64>() / outputs.len() as f64
    };
    assert!(mean(Label::Cat) > mean(Label::Dog));
}

/// Pets with the last sample's label flipped; every other row is unchanged.
fn pets_with_flipped_last_label() -> Dataset {
    let mut samples = Dataset::pets().samples().to_vec();
    let last = samples.last_mut().unwrap();
    last.label = Label::Dog;
    Dataset::new(samples).unwrap()
}

fn trained_on(dataset: &Dataset, config: &TrainConfig) -> Neuron {
    let mut rng = config.rng();
    let mut neuron = Neuron::new(dataset.num_features(), &mut rng).unwrap();
    train_neuron(&mut neuron, dataset, config, &mut rng).unwrap();
    neuron
}

#[test]
fn default_range_never_trains_on_the_last_sample() {
    let config = TrainConfig::default().with_seed(42);
    let original = trained_on(&Dataset::pets(), &config);
    let flipped = trained_on(&pets_with_flipped_last_label(), &config);
    assert_eq!(original.weights(), flipped.weights());
}

#[test]
fn full_range_does_train_on_the_last_sample() {
    let config = TrainConfig { sample_range: 8, ..TrainConfig::default().with_seed(42) };
    let original = trained_on(&Dataset::pets(), &config);
    let flipped = trained_on(&pets_with_flipped_last_label(), &config);
    assert_ne!(original.weights(), flipped.weights());
}

#[test]
fn wrong_width_query_fails_instead_of_reading_past_the_end() {
    let neuron = trained(7);
    assert_eq!(
        neuron.evaluate(&[1.0, 1.0], Mode::Inference).unwrap_err(),
        NeuronError::InvalidInput { expected: 5, actual: 2 }
    );
}
