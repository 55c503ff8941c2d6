use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::{NeuronError, Result};
use crate::neuron::neuron::Neuron;

/// What each input position encodes in the built-in pets dataset.
pub const FEATURE_NAMES: [&str; 5] = ["weight", "height", "pointy ears", "whiskers", "vertical pupil"];

/// Binary class label. `Dog` is target `0`, `Cat` is target `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Dog,
    Cat,
}

impl Label {
    /// Maps a step decision to its label. Only `0` and `1` are valid.
    pub fn from_decision(decision: u8) -> Result<Label> {
        match decision {
            0 => Ok(Label::Dog),
            1 => Ok(Label::Cat),
            other => Err(NeuronError::InvalidDecision(other)),
        }
    }

    pub fn target(self) -> u8 {
        match self {
            Label::Dog => 0,
            Label::Cat => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Dog => write!(f, "Dog"),
            Label::Cat => write!(f, "Cat"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: Label,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: Label) -> Sample {
        Sample { features, label }
    }
}

/// Serialized as a plain list of samples; deserialization goes through
/// `Dataset::new` so ragged rows are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct Dataset {
    samples: Vec<Sample>,
    num_features: usize,
}

impl Dataset {
    /// Builds a dataset, rejecting samples whose width differs from the first.
    pub fn new(samples: Vec<Sample>) -> Result<Dataset> {
        let num_features = samples.first().map_or(0, |s| s.features.len());
        if let Some(bad) = samples.iter().find(|s| s.features.len() != num_features) {
            return Err(NeuronError::InvalidInput {
                expected: num_features,
                actual: bad.features.len(),
            });
        }
        Ok(Dataset { samples, num_features })
    }

    /// The fixed eight-sample set: four dogs followed by four cats.
    pub fn pets() -> Dataset {
        let rows: [([f64; 5], Label); 8] = [
            ([1.0, 1.0, 1.0, 0.0, 0.0], Label::Dog),
            ([1.0, 0.0, 0.0, 0.0, 0.0], Label::Dog),
            ([0.0, 0.0, 0.0, 0.0, 0.0], Label::Dog),
            ([0.0, 0.0, 1.0, 0.0, 0.0], Label::Dog),
            ([1.0, 0.0, 0.0, 1.0, 1.0], Label::Cat),
            ([1.0, 1.0, 1.0, 1.0, 1.0], Label::Cat),
            ([0.0, 0.0, 0.0, 1.0, 1.0], Label::Cat),
            ([0.0, 0.0, 0.0, 0.0, 1.0], Label::Cat),
        ];
        Dataset {
            samples: rows.iter().map(|(f, l)| Sample::new(f.to_vec(), *l)).collect(),
            num_features: FEATURE_NAMES.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }
}

impl TryFrom<Vec<Sample>> for Dataset {
    type Error = NeuronError;

    fn try_from(samples: Vec<Sample>) -> Result<Dataset> {
        Dataset::new(samples)
    }
}

impl From<Dataset> for Vec<Sample> {
    fn from(dataset: Dataset) -> Vec<Sample> {
        dataset.samples
    }
}

/// Fraction of `samples` whose step decision matches their label.
/// An empty slice scores `0.0`.
pub fn accuracy(neuron: &Neuron, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for sample in samples {
        if neuron.step_activation(&sample.features)? == sample.label.target() {
            correct += 1;
        }
    }
    Ok(correct as f64 / samples.len() as f64)
}
