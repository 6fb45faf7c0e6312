/// Per-epoch statistics emitted by `train_until`.
///
/// When `TrainConfig::progress_tx` is set, one value is sent at the end of
/// every completed epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Summed half squared error over the whole example set, measured after
    /// the epoch's updates.
    pub total_error: f64,
    /// Wall-clock duration of this epoch in milliseconds.
    pub elapsed_ms: u64,
}
