use std::env;
use std::process::ExitCode;

use pyrite_nn::{print_values, train_loop, Dataset, Network, TrainConfig};

// Handwritten-digit bitmaps: 16x16 binary pixels, one-hot digit labels.
const INPUTS: usize = 256;
const HIDDEN: usize = 28;
const OUTPUTS: usize = 10;

fn main() -> ExitCode {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: digits <dataset>");
            eprintln!(
                "expects one sample per line: {INPUTS} pixel values then {OUTPUTS} one-hot targets"
            );
            return ExitCode::FAILURE;
        }
    };

    let mut data = match Dataset::from_file(&path, INPUTS, OUTPUTS) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("failed to load {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut network = Network::new(INPUTS, HIDDEN, OUTPUTS);

    // The learning rate is annealed rather than constant; both it and the
    // hidden-layer width are worth tuning per dataset.
    let config = TrainConfig::new(128, 1.0, 0.99);
    train_loop(&mut network, &mut data, &config, |stats| {
        println!(
            "[{:5}] error {:.12} :: learning rate {:.6}",
            stats.epoch, stats.mean_loss, stats.learning_rate
        );
    });

    if let Err(err) = network.save("saved.model") {
        eprintln!("failed to save model: {err}");
        return ExitCode::FAILURE;
    }
    let mut network = match Network::load("saved.model") {
        Ok(network) => network,
        Err(err) => {
            eprintln!("failed to reload model: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Quick sanity prediction; reusing the first training row keeps the
    // demo self-contained where a held-out test set would normally go.
    let prediction = network.predict(data.input(0));
    print_values(data.target(0));
    print_values(prediction);
    ExitCode::SUCCESS
}
