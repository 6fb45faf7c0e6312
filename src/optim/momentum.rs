use crate::layers::dense::Layer;

/// Online gradient descent with a one-step momentum term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    pub learning_rate: f64,
    pub momentum: f64,
}

impl Momentum {
    pub fn new(learning_rate: f64, momentum: f64) -> Momentum {
        Momentum { learning_rate, momentum }
    }

    /// Applies one update to `layer`. `deltas` has one entry per neuron,
    /// `inputs` one per incoming connection including the bias slot.
    pub fn step(&self, layer: &mut Layer, deltas: &[f64], inputs: &[f64]) {
        layer.apply_momentum(deltas, inputs, self.learning_rate, self.momentum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn test_zero_momentum_is_plain_gradient_step() {
        let weights = Matrix::from_data(vec![vec![0.2, -0.4, 0.1], vec![0.0, 0.3, -0.2]]).unwrap();
        let mut layer = Layer::from_weights(weights.clone(), false);
        let optimizer = Momentum::new(0.2, 0.0);
        let deltas = [0.5, -1.0];
        let inputs = [1.0, 0.25, 1.0];

        // Give the shadow some history so a non-zero momentum would show up.
        layer.prev_weights = Matrix::zeros(2, 3);
        optimizer.step(&mut layer, &deltas, &inputs);

        for r in 0..2 {
            for c in 0..3 {
                let expected = weights.get(r, c) + 0.2 * deltas[r] * inputs[c];
                assert_eq!(layer.weights.get(r, c), expected);
            }
        }
        assert_eq!(layer.prev_weights, weights);
    }
}
