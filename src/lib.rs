pub mod activation;
pub mod data;
pub mod error;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use data::dataset::Dataset;
pub use error::{Error, Result};
pub use loss::quadratic::QuadraticLoss;
pub use network::network::{print_values, Network};
pub use train::epoch_stats::EpochStats;
pub use train::loop_fn::train_loop;
pub use train::train_config::TrainConfig;
pub use train::trainer::train_epoch;
