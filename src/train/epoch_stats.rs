use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// One value is handed to the observer callback at the end of every
/// completed epoch; demos use it to print progress lines and callers can
/// serialize it for run logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Training loss summed over all samples in this epoch.
    pub total_loss: f64,
    /// `total_loss` divided by the sample count.
    pub mean_loss: f64,
    /// Learning rate this epoch ran with (before annealing).
    pub learning_rate: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
