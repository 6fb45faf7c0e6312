pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{train_epoch, total_error};
pub use epoch_stats::EpochStats;
pub use train_config::{TrainConfig, DEFAULT_ERROR_THRESHOLD};
pub use loop_fn::{train_until, TrainOutcome};
