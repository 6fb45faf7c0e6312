use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::epoch_stats::EpochStats;

/// Default summed half squared error below which training stops.
pub const DEFAULT_ERROR_THRESHOLD: f64 = 0.05;

/// Configuration for a `train_until` run.
///
/// # Fields
/// - `error_threshold`: stop once the summed error drops below this
/// - `max_epochs`     : give up after this many epochs
/// - `log_every`      : log progress at `info` level every N epochs (0 = never)
/// - `progress_tx`    : optional channel; one `EpochStats` per epoch. If the
///                       receiver is dropped the loop stops early.
/// - `stop_flag`      : optional atomic flag; when set the loop stops after
///                       the current epoch.
pub struct TrainConfig {
    pub error_threshold: f64,
    pub max_epochs: usize,
    pub log_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new(error_threshold: f64, max_epochs: usize) -> Self {
        TrainConfig {
            error_threshold,
            max_epochs,
            log_every: 0,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
