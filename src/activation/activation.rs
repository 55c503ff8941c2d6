use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// The two activations a neuron can apply to its weighted sum.
///
/// `Sigmoid` is the differentiable training-time activation, `Step` the
/// inference-time threshold. They produce different kinds of value, so
/// `apply` returns an `Evaluation` instead of a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    Step,
}

/// Result of applying an activation to a weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Evaluation {
    /// Logistic output in (0, 1).
    Continuous(f64),
    /// Hard class decision, `0` or `1`.
    Decision(u8),
}

impl ActivationFunction {
    pub fn apply(&self, x: f64) -> Evaluation {
        match self {
            ActivationFunction::Sigmoid => Evaluation::Continuous(continuous_activation(x)),
            ActivationFunction::Step => Evaluation::Decision(step_activation(x)),
        }
    }
}

/// Logistic squashing: `1 / (1 + e^-x)`.
pub fn continuous_activation(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Hard threshold at zero: `1` when `x >= 0`, else `0`.
pub fn step_activation(x: f64) -> u8 {
    if x >= 0.0 { 1 } else { 0 }
}

/// Sigmoid derivative expressed through the sigmoid's own output `y`.
pub fn sigmoid_derivative_from_output(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_one_half_at_zero() {
        assert_eq!(continuous_activation(0.0), 0.5);
    }

    #[test]
    fn sigmoid_saturates_at_the_tails() {
        assert!(continuous_activation(-50.0) < 1e-20);
        assert!(continuous_activation(50.0) > 1.0 - 1e-15);
    }

    #[test]
    fn step_threshold_includes_zero() {
        assert_eq!(step_activation(0.0), 1);
        assert_eq!(step_activation(-0.0), 1);
        assert_eq!(step_activation(-1e-12), 0);
        assert_eq!(step_activation(3.0), 1);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert_eq!(sigmoid_derivative_from_output(0.5), 0.25);
        assert!(sigmoid_derivative_from_output(0.9) < 0.25);
        assert_eq!(sigmoid_derivative_from_output(1.0), 0.0);
    }

    #[test]
    fn apply_keeps_the_two_shapes_apart() {
        assert_eq!(ActivationFunction::Sigmoid.apply(0.0), Evaluation::Continuous(0.5));
        assert_eq!(ActivationFunction::Step.apply(0.3), Evaluation::Decision(1));
        assert_eq!(ActivationFunction::Step.apply(-0.3), Evaluation::Decision(0));
    }
}
