use thiserror::Error;

/// Result type for neuron construction, evaluation and training.
pub type Result<T> = std::result::Result<T, NeuronError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeuronError {
    /// The weight buffer could not be reserved.
    #[error("failed to allocate {requested} weight slots")]
    Allocation { requested: usize },

    /// An input vector whose length does not match the neuron's feature count.
    #[error("expected {expected} inputs, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    /// Training targets are binary labels.
    #[error("target must be 0 or 1, got {0}")]
    InvalidTarget(u8),

    /// A step decision outside `{0, 1}` cannot be mapped to a label.
    #[error("decision must be 0 or 1, got {0}")]
    InvalidDecision(u8),

    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),
}
