use std::fs;

use tempfile::TempDir;

use pyrite_nn::{train_loop, Dataset, Network, QuadraticLoss, TrainConfig};

fn mean_loss(network: &mut Network, data: &Dataset) -> f64 {
    let total: f64 = (0..data.rows())
        .map(|row| QuadraticLoss::loss(network.predict(data.input(row)), data.target(row)))
        .sum();
    total / data.rows() as f64
}

#[test]
fn file_to_trained_model_and_back() {
    let tmp = TempDir::new().unwrap();

    // Inclusive OR, the smallest dataset a one-hidden-layer sigmoid
    // network learns reliably.
    let data_path = tmp.path().join("or.data");
    fs::write(&data_path, "0 0 0\n0 1 1\n1 0 1\n1 1 1\n").unwrap();

    let mut data = Dataset::from_file(&data_path, 2, 1).unwrap();
    assert_eq!(data.rows(), 4);
    assert_eq!(data.input_size(), 2);
    assert_eq!(data.target_size(), 1);

    let mut network = Network::new(2, 4, 1);
    let before = mean_loss(&mut network, &data);

    let config = TrainConfig::new(500, 1.0, 0.995);
    let mut epochs_seen = 0;
    let last_mean = train_loop(&mut network, &mut data, &config, |_| {
        epochs_seen += 1;
    });
    assert_eq!(epochs_seen, 500);

    let after = mean_loss(&mut network, &data);
    assert!(
        after < before,
        "training did not reduce loss: before={before} after={after}"
    );
    assert!(last_mean.is_finite());

    // Text persistence: the reloaded model must predict identically.
    let model_path = tmp.path().join("trained.model");
    network.save(&model_path).unwrap();
    let mut restored = Network::load(&model_path).unwrap();
    assert_eq!(restored.input_size(), network.input_size());
    assert_eq!(restored.hidden_size(), network.hidden_size());
    assert_eq!(restored.output_size(), network.output_size());

    for row in 0..data.rows() {
        let expected = network.predict(data.input(row)).to_vec();
        let got = restored.predict(data.input(row)).to_vec();
        for (a, b) in expected.iter().zip(&got) {
            assert!((a - b).abs() < 1e-6, "prediction drifted: {a} vs {b}");
        }
    }
}

#[test]
fn loading_a_model_replaces_the_old_shape() {
    let tmp = TempDir::new().unwrap();
    let model_path = tmp.path().join("wide.model");

    Network::new(8, 6, 3).save(&model_path).unwrap();

    // The caller's existing network has different dimensions; the loaded
    // value carries the file's header dims, not the old instance's.
    let narrow = Network::new(2, 2, 1);
    assert_eq!(narrow.input_size(), 2);

    let loaded = Network::load(&model_path).unwrap();
    assert_eq!(loaded.input_size(), 8);
    assert_eq!(loaded.hidden_size(), 6);
    assert_eq!(loaded.output_size(), 3);
}
