// This binary crate is intentionally minimal.
// All forward-pass logic lives in the library (src/lib.rs and its modules).
// Run the browser lab with:
//   cargo run --bin lab
fn main() {
    println!("neuromat: a two-layer forward-pass explorer.");
    println!("Run `cargo run --bin lab` and open http://127.0.0.1:7878 in your browser.");
}
