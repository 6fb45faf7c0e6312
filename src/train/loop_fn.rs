use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{check_examples, total_error, train_epoch};

/// How a `train_until` run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainOutcome {
    /// Epochs completed.
    pub epochs: usize,
    /// Summed half squared error after the last completed epoch.
    pub total_error: f64,
    /// Whether `total_error` dropped below the configured threshold.
    pub converged: bool,
}

/// Trains `network` one epoch at a time until the summed half squared error
/// over all examples drops below `config.error_threshold`.
///
/// # Early termination
/// The loop also ends when:
/// - `config.max_epochs` epochs have run,
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// `InvalidTopology` if the example set is empty or `inputs` and `targets`
/// differ in count; `DimensionMismatch` if any example has the wrong width.
pub fn train_until(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    check_examples(inputs, targets)?;

    let mut outcome = TrainOutcome {
        epochs: 0,
        total_error: total_error(network, inputs, targets)?,
        converged: false,
    };

    while outcome.epochs < config.max_epochs {
        if stop_requested(config) {
            log::info!("Stop requested after {} epochs", outcome.epochs);
            break;
        }

        let t_start = Instant::now();

        train_epoch(network, inputs, targets)?;
        outcome.epochs += 1;
        outcome.total_error = total_error(network, inputs, targets)?;
        outcome.converged = outcome.total_error < config.error_threshold;

        let stats = EpochStats {
            epoch: outcome.epochs,
            total_error: outcome.total_error,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if config.log_every > 0 && stats.epoch % config.log_every == 0 {
            log::info!("Epoch {}: total error = {:.6}", stats.epoch, stats.total_error);
        } else {
            log::debug!("Epoch {}: total error = {:.6}", stats.epoch, stats.total_error);
        }

        if outcome.converged {
            log::info!(
                "Converged after {} epochs (total error {:.6} < {})",
                outcome.epochs, outcome.total_error, config.error_threshold
            );
            send_progress(config, stats);
            break;
        }

        if !send_progress(config, stats) {
            log::info!("Progress receiver dropped; stopping after {} epochs", outcome.epochs);
            break;
        }
    }

    if !outcome.converged && outcome.epochs >= config.max_epochs {
        log::warn!(
            "No convergence within {} epochs (total error {:.6})",
            config.max_epochs, outcome.total_error
        );
    }

    Ok(outcome)
}

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Returns `false` once the receiver is gone.
fn send_progress(config: &TrainConfig, stats: EpochStats) -> bool {
    match config.progress_tx {
        Some(ref tx) => tx.send(stats).is_ok(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::spec::NetworkSpec;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::{atomic::AtomicBool, mpsc, Arc};

    fn xor() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        (
            vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            vec![vec![-1.0], vec![1.0], vec![1.0], vec![-1.0]],
        )
    }

    fn network(seed: u64) -> Network {
        Network::new(NetworkSpec::new(2, 4, 1, 0.2, 0.0), &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_stops_at_max_epochs() {
        let (inputs, targets) = xor();
        let mut net = network(1);
        let outcome = train_until(&mut net, &inputs, &targets, &TrainConfig::new(0.0, 5)).unwrap();
        assert_eq!(outcome.epochs, 5);
        assert!(!outcome.converged);
    }

    #[test]
    fn test_already_converged_threshold_stops_after_one_epoch() {
        let (inputs, targets) = xor();
        let mut net = network(2);
        let outcome = train_until(&mut net, &inputs, &targets, &TrainConfig::new(f64::INFINITY, 50)).unwrap();
        assert_eq!(outcome.epochs, 1);
        assert!(outcome.converged);
    }

    #[test]
    fn test_zero_max_epochs_trains_nothing() {
        let (inputs, targets) = xor();
        let mut net = network(3);
        let before = net.input_to_hidden().clone();
        let outcome = train_until(&mut net, &inputs, &targets, &TrainConfig::new(0.05, 0)).unwrap();
        assert_eq!(outcome.epochs, 0);
        assert_eq!(net.input_to_hidden(), &before);
    }

    #[test]
    fn test_progress_channel_receives_every_epoch() {
        let (inputs, targets) = xor();
        let mut net = network(4);
        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(0.0, 7);
        config.progress_tx = Some(tx);

        let outcome = train_until(&mut net, &inputs, &targets, &config).unwrap();
        drop(config);

        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.len(), 7);
        assert_eq!(stats.iter().map(|s| s.epoch).collect::<Vec<_>>(), (1..=7).collect::<Vec<_>>());
        assert_eq!(stats[6].total_error, outcome.total_error);
    }

    #[test]
    fn test_dropped_receiver_stops_training() {
        let (inputs, targets) = xor();
        let mut net = network(5);
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut config = TrainConfig::new(0.0, 100);
        config.progress_tx = Some(tx);

        let outcome = train_until(&mut net, &inputs, &targets, &config).unwrap();
        assert_eq!(outcome.epochs, 1);
    }

    #[test]
    fn test_stop_flag_prevents_training() {
        let (inputs, targets) = xor();
        let mut net = network(6);
        let mut config = TrainConfig::new(0.0, 100);
        config.stop_flag = Some(Arc::new(AtomicBool::new(true)));

        let outcome = train_until(&mut net, &inputs, &targets, &config).unwrap();
        assert_eq!(outcome.epochs, 0);
    }
}
