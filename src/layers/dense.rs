use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{math::matrix::{dot, Matrix}, activation::activation::BipolarSigmoid};

/// Value held by every bias slot.
pub const BIAS: f64 = 1.0;

/// One fully connected layer: its weights, their momentum shadow, and the
/// node buffer it writes on every forward pass.
#[derive(Debug, Clone)]
pub struct Layer{
    pub size: usize,
    /// `size` activated values, followed by a fixed `BIAS` slot when this
    /// layer feeds another one.
    pub neurons: Vec<f64>,
    /// `size x (input_size + 1)`; the last column weighs the upstream bias.
    pub weights: Matrix,
    /// Each entry's value just before its most recent update.
    pub prev_weights: Matrix,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(size: usize, input_size: usize, with_bias: bool, rng: &mut R) -> Layer {
        Layer::from_weights(Matrix::uniform(size, input_size + 1, rng), with_bias)
    }

    /// Wraps an existing weight matrix. The shadow starts equal to the
    /// weights, so the first update carries no momentum.
    pub fn from_weights(weights: Matrix, with_bias: bool) -> Layer {
        let size = weights.rows;
        let mut neurons = vec![0.0; size + usize::from(with_bias)];
        if with_bias {
            neurons[size] = BIAS;
        }

        Layer {
            size,
            neurons,
            prev_weights: weights.clone(),
            weights,
        }
    }

    /// Overwrites every non-bias neuron with `f(row . inputs)`.
    /// `inputs` must already carry the upstream bias slot.
    pub fn feed_from(&mut self, inputs: &[f64]) {
        let weights = &self.weights;

        #[cfg(feature = "parallel")]
        self.neurons[..self.size]
            .par_iter_mut()
            .zip(weights.data.par_iter())
            .for_each(|(neuron, row)| *neuron = BipolarSigmoid::function(dot(inputs, row)));

        #[cfg(not(feature = "parallel"))]
        self.neurons[..self.size]
            .iter_mut()
            .zip(weights.data.iter())
            .for_each(|(neuron, row)| *neuron = BipolarSigmoid::function(dot(inputs, row)));
    }

    /// Activated values without the bias slot.
    pub fn outputs(&self) -> &[f64] {
        &self.neurons[..self.size]
    }

    /// Momentum update of every weight, row `r` scaled by `deltas[r]` and
    /// column `c` by `inputs[c]`:
    ///
    /// `w' = w + momentum * (w - w_prev) + lr * delta * input`, then `w_prev = w`.
    pub fn apply_momentum(&mut self, deltas: &[f64], inputs: &[f64], lr: f64, momentum: f64) {
        let update_row = |((row, prev_row), delta): ((&mut Vec<f64>, &mut Vec<f64>), &f64)| {
            for ((w, prev), input) in row.iter_mut().zip(prev_row.iter_mut()).zip(inputs) {
                let current = *w;
                *w = current + momentum * (current - *prev) + lr * delta * input;
                *prev = current;
            }
        };

        #[cfg(feature = "parallel")]
        self.weights.data
            .par_iter_mut()
            .zip(self.prev_weights.data.par_iter_mut())
            .zip(deltas.par_iter())
            .for_each(update_row);

        #[cfg(not(feature = "parallel"))]
        self.weights.data
            .iter_mut()
            .zip(self.prev_weights.data.iter_mut())
            .zip(deltas.iter())
            .for_each(update_row);
    }
}
