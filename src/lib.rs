pub mod math;
pub mod activation;
pub mod field;
pub mod forward;
pub mod workspace;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::sigmoid;
pub use field::field::MatrixField;
pub use field::text::{display_rounded, format_matrix, parse_matrix, MatrixTextError};
pub use forward::pass::{compute_net, compute_out};
pub use workspace::workspace::Workspace;
