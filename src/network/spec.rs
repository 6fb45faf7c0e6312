use std::path::Path;

use serde::{Serialize, Deserialize};
use crate::error::{NetworkError, Result};

/// Which output weights the hidden-layer deltas are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackpropMode {
    /// Hidden deltas read the output weights after this step has already
    /// updated them.
    #[default]
    InPlace,
    /// Hidden deltas read a copy of the output weights taken before the
    /// output layer is updated (textbook backpropagation).
    Snapshot,
}

/// Topology and hyperparameters of a network.
///
/// A spec can be saved to / loaded from JSON so runs are reproducible from a
/// config file. Trained weights are not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub num_inputs: usize,
    pub num_hidden: usize,
    pub num_outputs: usize,
    pub learning_rate: f64,
    /// Scale of the previous step's weight change added to each update.
    pub momentum: f64,
    #[serde(default)]
    pub backprop: BackpropMode,
}

impl NetworkSpec {
    pub fn new(
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        learning_rate: f64,
        momentum: f64,
    ) -> NetworkSpec {
        NetworkSpec {
            num_inputs,
            num_hidden,
            num_outputs,
            learning_rate,
            momentum,
            backprop: BackpropMode::default(),
        }
    }

    pub fn with_backprop(mut self, backprop: BackpropMode) -> NetworkSpec {
        self.backprop = backprop;
        self
    }

    /// Every layer needs at least one neuron and both hyperparameters must
    /// be finite.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("num_inputs", self.num_inputs),
            ("num_hidden", self.num_hidden),
            ("num_outputs", self.num_outputs),
        ];
        for (name, size) in sizes {
            if size == 0 {
                return Err(NetworkError::InvalidTopology(format!("{} must be at least 1", name)));
            }
        }

        let params = [("learning_rate", self.learning_rate), ("momentum", self.momentum)];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(NetworkError::InvalidTopology(format!("{} must be finite, got {}", name, value)));
            }
        }

        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}
