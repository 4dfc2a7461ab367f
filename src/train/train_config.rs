/// Hyperparameters for a [`train_loop`](crate::train::loop_fn::train_loop)
/// run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `learning_rate` — per-update step size for the first epoch
/// - `anneal`        — the learning rate is multiplied by this after every
///                     epoch; use `1.0` for a constant rate
#[derive(Debug, Clone, Copy)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub anneal: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64, anneal: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            anneal,
        }
    }
}
