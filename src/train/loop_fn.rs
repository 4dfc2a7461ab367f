use std::time::Instant;

use crate::data::dataset::Dataset;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Trains `network` for `config.epochs` epochs and returns the mean
/// training loss of the **last completed epoch**.
///
/// Each epoch shuffles the dataset, runs one full per-sample SGD pass,
/// multiplies the learning rate by `config.anneal`, and hands an
/// [`EpochStats`] to `observer`.
///
/// # Panics
/// Panics if `config.epochs == 0` or the dataset widths don't match the
/// network.
pub fn train_loop(
    network: &mut Network,
    data: &mut Dataset,
    config: &TrainConfig,
    mut observer: impl FnMut(&EpochStats),
) -> f64 {
    assert!(config.epochs > 0, "epochs must be at least 1");
    assert_eq!(
        data.input_size(),
        network.input_size(),
        "dataset input width must match the network"
    );
    assert_eq!(
        data.target_size(),
        network.output_size(),
        "dataset target width must match the network"
    );

    let mut rate = config.learning_rate;
    let mut last_mean_loss = 0.0;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        data.shuffle();
        let total_loss = train_epoch(network, data, rate);
        let mean_loss = total_loss / data.rows() as f64;
        last_mean_loss = mean_loss;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            total_loss,
            mean_loss,
            learning_rate: rate,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        observer(&stats);

        rate *= config.anneal;
    }

    last_mean_loss
}

#[cfg(test)]
mod tests {
    use super::train_loop;
    use crate::data::dataset::Dataset;
    use crate::network::network::Network;
    use crate::train::train_config::TrainConfig;

    fn or_dataset() -> Dataset {
        Dataset::from_rows(
            vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]],
        )
        .unwrap()
    }

    #[test]
    fn observer_sees_every_epoch_with_annealed_rate() {
        let mut network = Network::new(2, 3, 1);
        let mut data = or_dataset();
        let config = TrainConfig::new(5, 1.0, 0.5);

        let mut seen = Vec::new();
        let last = train_loop(&mut network, &mut data, &config, |stats| {
            seen.push((stats.epoch, stats.learning_rate, stats.mean_loss));
        });

        assert_eq!(seen.len(), 5);
        assert_eq!(seen[0].0, 1);
        assert_eq!(seen[4].0, 5);
        for (i, &(_, rate, _)) in seen.iter().enumerate() {
            let expected = 1.0 * 0.5f64.powi(i as i32);
            assert!((rate - expected).abs() < 1e-12);
        }
        assert_eq!(last, seen[4].2);
    }

    #[test]
    fn mean_loss_is_total_over_rows() {
        let mut network = Network::new(2, 3, 1);
        let mut data = or_dataset();
        let config = TrainConfig::new(1, 0.1, 1.0);

        let mut reported = None;
        train_loop(&mut network, &mut data, &config, |stats| {
            reported = Some((stats.total_loss, stats.mean_loss));
        });
        let (total, mean) = reported.unwrap();
        assert!((mean - total / 4.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "dataset input width")]
    fn mismatched_dataset_is_rejected() {
        let mut network = Network::new(3, 3, 1);
        let mut data = or_dataset();
        let config = TrainConfig::new(1, 0.1, 1.0);
        train_loop(&mut network, &mut data, &config, |_| {});
    }
}
