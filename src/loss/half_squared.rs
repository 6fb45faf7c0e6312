/// Half squared error, the convergence metric of the training loop.
pub struct HalfSquaredError;

impl HalfSquaredError {
    /// Scalar loss: sum(0.5 * (expected - predicted)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| 0.5 * (y - p).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss_sums_over_outputs() {
        assert_eq!(HalfSquaredError::loss(&[0.5, -1.0], &[1.0, 1.0]), 0.5 * 0.25 + 0.5 * 4.0);
    }

    #[test]
    fn test_loss_is_zero_on_match() {
        assert_eq!(HalfSquaredError::loss(&[0.3, -0.7], &[0.3, -0.7]), 0.0);
    }
}
