use std::f64::consts::E;

/// Bipolar logistic activation, `2 / (1 + e^-x) - 1`.
///
/// Same curve as `tanh(x / 2)`, range `(-1, 1)`.
pub struct BipolarSigmoid;

impl BipolarSigmoid {
    pub fn function(x: f64) -> f64 {
        2.0 / (1.0 + E.powf(-x)) - 1.0
    }

    /// Derivative expressed in terms of the activated value `y = function(x)`,
    /// not the weighted sum. Always pass a stored node value here.
    pub fn derivative(y: f64) -> f64 {
        0.5 * (1.0 - y * y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_at_zero() {
        assert_eq!(BipolarSigmoid::function(0.0), 0.0);
    }

    #[test]
    fn test_function_matches_half_tanh() {
        for &x in &[-6.0, -1.5, -0.25, 0.3, 2.0, 5.5] {
            let expected = (x / 2.0_f64).tanh();
            assert!((BipolarSigmoid::function(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_function_is_bounded() {
        for &x in &[-30.0, -3.0, 3.0, 30.0] {
            let y = BipolarSigmoid::function(x);
            assert!(y > -1.0 && y < 1.0, "{x} -> {y}");
        }
    }

    #[test]
    fn test_derivative_takes_activated_value() {
        // d/dx tanh(x/2) = 0.5 * (1 - tanh(x/2)^2)
        let x = 0.8;
        let h = 1e-6;
        let numeric = (BipolarSigmoid::function(x + h) - BipolarSigmoid::function(x - h)) / (2.0 * h);
        let analytic = BipolarSigmoid::derivative(BipolarSigmoid::function(x));
        assert!((numeric - analytic).abs() < 1e-8);
        assert_eq!(BipolarSigmoid::derivative(0.0), 0.5);
    }
}
