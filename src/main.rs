// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example xor
fn main() {
    println!("pyrite-nn: a single-hidden-layer neural network in Rust.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
