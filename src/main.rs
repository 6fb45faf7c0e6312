mod args;

use args::Args;
use clap::Parser;
use momentum_nn::{train_until, Network, NetworkSpec, TrainConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::{Config, SimpleLogger};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![
        vec![-1.0],
        vec![1.0],
        vec![1.0],
        vec![-1.0],
    ];

    let spec = match args.spec {
        Some(ref path) => {
            log::info!("Loading network spec from {}", path.display());
            NetworkSpec::load_json(path)?
        }
        None => NetworkSpec::new(2, args.hidden, 1, args.learning_rate, args.momentum)
            .with_backprop(args.backprop.into()),
    };
    if spec.num_inputs != 2 || spec.num_outputs != 1 {
        return Err(format!(
            "XOR needs 2 inputs and 1 output, spec has {} and {}",
            spec.num_inputs, spec.num_outputs
        ).into());
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Seed: {}", seed);
    let mut network = Network::new(spec, &mut StdRng::seed_from_u64(seed))?;

    let mut config = TrainConfig::new(args.threshold, args.max_epochs);
    config.log_every = args.log_every;

    log::info!("Training network");
    let outcome = train_until(&mut network, &inputs, &targets, &config)?;
    log::info!(
        "Finished after {} epochs, total error {:.6}",
        outcome.epochs, outcome.total_error
    );

    // Outputs land close to, not exactly on, -1 and 1.
    for input in &inputs {
        let output = network.infer(input)?;
        println!("Input: {:?} -> Output: {:.4}", input, output[0]);
    }

    if !outcome.converged {
        return Err(format!("did not converge within {} epochs", args.max_epochs).into());
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::init(args.log_level.into(), Config::default())?;
    Ok(args)
}
