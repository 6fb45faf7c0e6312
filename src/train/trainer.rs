use crate::{
    error::{NetworkError, Result},
    loss::half_squared::HalfSquaredError,
    network::network::Network,
};

/// One online pass: a `train_step` per example, in order.
/// Returns each example's pre-update error vector.
pub fn train_epoch(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<Vec<Vec<f64>>> {
    check_examples(inputs, targets)?;

    inputs.iter().zip(targets.iter())
        .map(|(input, target)| network.train_step(input, target))
        .collect()
}

/// Summed half squared error of the current weights over every example.
pub fn total_error(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<f64> {
    check_examples(inputs, targets)?;

    let mut total = 0.0;
    for (input, target) in inputs.iter().zip(targets.iter()) {
        let output = network.infer(input)?;
        total += HalfSquaredError::loss(&output, target);
    }
    Ok(total)
}

pub(crate) fn check_examples(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<()> {
    if inputs.is_empty() {
        return Err(NetworkError::InvalidTopology("example set is empty".to_string()));
    }
    if inputs.len() != targets.len() {
        return Err(NetworkError::InvalidTopology(format!(
            "{} inputs but {} targets",
            inputs.len(),
            targets.len()
        )));
    }
    Ok(())
}
