use rand::Rng;

use crate::{
    activation::activation::BipolarSigmoid,
    error::{check_len, NetworkError, Result},
    layers::dense::{Layer, BIAS},
    math::matrix::{dot, Matrix},
    network::spec::{BackpropMode, NetworkSpec},
    optim::momentum::Momentum,
};

/// A one-hidden-layer network trained online by backpropagation with momentum.
///
/// Node buffers are reused across calls, so `infer` and `train_step` take
/// `&mut self`. Share an instance between threads only behind a lock; for
/// parallel training give each worker its own network.
#[derive(Debug, Clone)]
pub struct Network {
    spec: NetworkSpec,
    optimizer: Momentum,
    /// `num_inputs` values followed by the input bias slot.
    inputs: Vec<f64>,
    hidden: Layer,
    output: Layer,
}

impl Network {
    /// Builds a network with every weight drawn uniformly from `[-0.5, 0.5)`,
    /// input-to-hidden first.
    pub fn new<R: Rng + ?Sized>(spec: NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;

        let hidden = Layer::new(spec.num_hidden, spec.num_inputs, true, rng);
        let output = Layer::new(spec.num_outputs, spec.num_hidden, false, rng);

        log::debug!(
            "Created network {}-{}-{} (lr = {}, momentum = {}, backprop = {:?})",
            spec.num_inputs, spec.num_hidden, spec.num_outputs,
            spec.learning_rate, spec.momentum, spec.backprop
        );

        Ok(Network::assemble(spec, hidden, output))
    }

    /// Builds a network from known weights. `input_to_hidden` must be
    /// `num_hidden x (num_inputs + 1)` and `hidden_to_output`
    /// `num_outputs x (num_hidden + 1)`, the last column weighing the bias.
    pub fn from_weights(spec: NetworkSpec, input_to_hidden: Matrix, hidden_to_output: Matrix) -> Result<Network> {
        spec.validate()?;

        let expected = [
            ("input_to_hidden", &input_to_hidden, (spec.num_hidden, spec.num_inputs + 1)),
            ("hidden_to_output", &hidden_to_output, (spec.num_outputs, spec.num_hidden + 1)),
        ];
        for (name, matrix, shape) in expected {
            if matrix.shape() != shape {
                return Err(NetworkError::InvalidTopology(format!(
                    "{} must be {}x{}, got {}x{}",
                    name, shape.0, shape.1, matrix.rows, matrix.cols
                )));
            }
        }

        let hidden = Layer::from_weights(input_to_hidden, true);
        let output = Layer::from_weights(hidden_to_output, false);
        Ok(Network::assemble(spec, hidden, output))
    }

    fn assemble(spec: NetworkSpec, hidden: Layer, output: Layer) -> Network {
        let mut inputs = vec![0.0; spec.num_inputs + 1];
        inputs[spec.num_inputs] = BIAS;

        Network {
            optimizer: Momentum::new(spec.learning_rate, spec.momentum),
            spec,
            inputs,
            hidden,
            output,
        }
    }

    /// Runs a forward pass and returns the `num_outputs` activations.
    /// Weights are not touched.
    pub fn infer(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.forward(inputs)?;
        Ok(self.output.outputs().to_vec())
    }

    /// One online training step on a single example.
    ///
    /// Returns `|output - target|` per output neuron, measured on the forward
    /// pass that preceded this step's update.
    pub fn train_step(&mut self, inputs: &[f64], targets: &[f64]) -> Result<Vec<f64>> {
        check_len("target", self.spec.num_outputs, targets.len())?;
        self.forward(inputs)?;

        let errors = self.output.outputs().iter().zip(targets)
            .map(|(y, t)| (y - t).abs())
            .collect();

        // Output layer: delta = f'(y) * (t - y)
        let output_deltas: Vec<f64> = self.output.outputs().iter().zip(targets)
            .map(|(&y, &t)| BipolarSigmoid::derivative(y) * (t - y))
            .collect();

        let snapshot = match self.spec.backprop {
            BackpropMode::InPlace => None,
            BackpropMode::Snapshot => Some(self.output.weights.clone()),
        };

        self.optimizer.step(&mut self.output, &output_deltas, &self.hidden.neurons);

        // Hidden layer: delta = f'(h) * sum_o(delta_o * w_oh). Under InPlace
        // the weights read here are the ones just updated above.
        let downstream = snapshot.as_ref().unwrap_or(&self.output.weights);
        let hidden_deltas: Vec<f64> = self.hidden.outputs().iter().enumerate()
            .map(|(h, &y)| BipolarSigmoid::derivative(y) * dot(&output_deltas, &downstream.column(h)))
            .collect();

        self.optimizer.step(&mut self.hidden, &hidden_deltas, &self.inputs);

        Ok(errors)
    }

    fn forward(&mut self, inputs: &[f64]) -> Result<()> {
        check_len("input", self.spec.num_inputs, inputs.len())?;

        self.inputs[..self.spec.num_inputs].copy_from_slice(inputs);
        self.hidden.feed_from(&self.inputs);
        self.output.feed_from(&self.hidden.neurons);
        Ok(())
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn num_inputs(&self) -> usize {
        self.spec.num_inputs
    }

    pub fn num_hidden(&self) -> usize {
        self.spec.num_hidden
    }

    pub fn num_outputs(&self) -> usize {
        self.spec.num_outputs
    }

    /// `num_hidden x (num_inputs + 1)`; entry `[h][i]` connects input `i` to hidden `h`.
    pub fn input_to_hidden(&self) -> &Matrix {
        &self.hidden.weights
    }

    pub fn input_to_hidden_prev(&self) -> &Matrix {
        &self.hidden.prev_weights
    }

    /// `num_outputs x (num_hidden + 1)`; entry `[o][h]` connects hidden `h` to output `o`.
    pub fn hidden_to_output(&self) -> &Matrix {
        &self.output.weights
    }

    pub fn hidden_to_output_prev(&self) -> &Matrix {
        &self.output.prev_weights
    }

    /// Input buffer as left by the last forward pass, bias slot included.
    pub fn input_nodes(&self) -> &[f64] {
        &self.inputs
    }

    /// Hidden buffer as left by the last forward pass, bias slot included.
    pub fn hidden_nodes(&self) -> &[f64] {
        &self.hidden.neurons
    }

    pub fn output_nodes(&self) -> &[f64] {
        &self.output.neurons
    }
}
