pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²). Empty input yields `0.0`.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        if predicted.is_empty() {
            return 0.0;
        }
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_of_identical_slices_is_zero() {
        assert_eq!(MseLoss::loss(&[0.2, 0.8], &[0.2, 0.8]), 0.0);
    }

    #[test]
    fn mse_averages_squared_errors() {
        assert_eq!(MseLoss::loss(&[0.5, 1.0], &[0.0, 0.0]), 0.625);
        assert_eq!(MseLoss::loss(&[], &[]), 0.0);
    }
}
