pub mod network;
pub mod persist;

pub use network::{print_values, Network};
