pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::BipolarSigmoid;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::{BackpropMode, NetworkSpec};
pub use loss::half_squared::HalfSquaredError;
pub use optim::momentum::Momentum;
pub use train::{train_epoch, train_until, total_error, TrainConfig, TrainOutcome, DEFAULT_ERROR_THRESHOLD};
pub use error::{NetworkError, Result};
