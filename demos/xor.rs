use pyrite_nn::{train_loop, Dataset, Network, TrainConfig};

fn main() {
    let mut network = Network::new(2, 4, 1);

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let targets = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];
    let mut data = Dataset::from_rows(inputs, targets).expect("xor rows are well formed");

    let config = TrainConfig::new(10_000, 1.0, 1.0);
    train_loop(&mut network, &mut data, &config, |stats| {
        if stats.epoch % 1000 == 0 {
            println!("Epoch {}: loss = {:.6}", stats.epoch, stats.mean_loss);
        }
    });

    for row in 0..data.rows() {
        let output = network.predict(data.input(row));
        println!("Input: {:?} -> Output: {:.4}", data.input(row), output[0]);
    }
}
