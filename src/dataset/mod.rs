pub mod dataset;

pub use dataset::{accuracy, Dataset, Label, Sample, FEATURE_NAMES};
