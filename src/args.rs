use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use momentum_nn::{BackpropMode, DEFAULT_ERROR_THRESHOLD};

#[derive(Parser, Debug)]
#[command(name = "momentum-nn")]
#[command(version = "0.1.0")]
#[command(about = "Trains a 2-N-1 network on XOR with online backpropagation and momentum")]
pub struct Args {
    /// Number of hidden neurons.
    #[arg(long, default_value_t = 4)]
    pub hidden: usize,

    /// Step size of each weight update.
    #[arg(long, default_value_t = 0.2)]
    pub learning_rate: f64,

    /// Scale of the previous weight change added to each update.
    #[arg(long, default_value_t = 0.0)]
    pub momentum: f64,

    /// Which output weights the hidden deltas are computed against.
    #[arg(long, value_enum, default_value_t = Backprop::InPlace)]
    pub backprop: Backprop,

    /// JSON network spec; replaces --hidden, --learning-rate, --momentum and --backprop.
    #[arg(long)]
    pub spec: Option<PathBuf>,

    /// Stop once the summed half squared error drops below this.
    #[arg(long, default_value_t = DEFAULT_ERROR_THRESHOLD)]
    pub threshold: f64,

    /// Give up after this many epochs.
    #[arg(long, default_value_t = 100_000)]
    pub max_epochs: usize,

    /// Log the total error every N epochs.
    #[arg(long, default_value_t = 100)]
    pub log_every: usize,

    /// Seed for weight initialization; random if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backprop {
    InPlace,
    Snapshot,
}

impl From<Backprop> for BackpropMode {
    fn from(backprop: Backprop) -> BackpropMode {
        match backprop {
            Backprop::InPlace => BackpropMode::InPlace,
            Backprop::Snapshot => BackpropMode::Snapshot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
