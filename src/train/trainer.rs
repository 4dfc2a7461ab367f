use crate::data::dataset::Dataset;
use crate::network::network::Network;

/// Runs one training epoch: every row in its current order, one SGD step
/// each.
///
/// Returns the loss summed over all rows — divide by [`Dataset::rows`]
/// when a mean is wanted.
pub fn train_epoch(network: &mut Network, data: &Dataset, rate: f64) -> f64 {
    let mut total_loss = 0.0;
    for row in 0..data.rows() {
        total_loss += network.train(data.input(row), data.target(row), rate);
    }
    total_loss
}
