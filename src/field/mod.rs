pub mod text;
pub mod field;

pub use field::MatrixField;
pub use text::{display_rounded, format_matrix, parse_matrix, MatrixTextError};
