pub mod pass;

pub use pass::{compute_net, compute_out};
