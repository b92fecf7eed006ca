use crate::field::text::{format_matrix, parse_matrix, MatrixTextError};
use crate::math::matrix::Matrix;

/// State of one matrix textarea: raw text plus validity flags for a
/// configured `rows × cols` shape.
///
/// `valid` tracks whether the current text parses against the shape;
/// `touched` is set on the first commit, and only touched-invalid fields
/// are flagged in the UI.
#[derive(Debug, Clone)]
pub struct MatrixField {
    pub rows: usize,
    pub cols: usize,
    pub text: String,
    pub touched: bool,
    pub valid: bool,
}

impl MatrixField {
    pub fn new(rows: usize, cols: usize) -> Self {
        MatrixField {
            rows,
            cols,
            text: String::new(),
            touched: false,
            valid: false,
        }
    }

    /// Blur commit: stores the text, marks the field touched, and tries to
    /// parse. On success the text is canonicalized from the parsed matrix
    /// (`,` becomes `.`, whitespace normalized) and the matrix is returned
    /// for the model to take; on failure the raw text is kept and the field
    /// turns invalid.
    pub fn commit(&mut self, text: &str) -> Result<Matrix, MatrixTextError> {
        self.touched = true;
        self.text = text.to_owned();
        match parse_matrix(text, self.rows, self.cols) {
            Ok(matrix) => {
                self.valid = true;
                self.text = format_matrix(&matrix);
                Ok(matrix)
            }
            Err(err) => {
                self.valid = false;
                Err(err)
            }
        }
    }

    /// The model pushed a matrix down (auto-fill rebuild): reformat the text
    /// from it and revalidate.
    pub fn accept(&mut self, matrix: &Matrix) {
        self.text = format_matrix(matrix);
        self.revalidate();
    }

    /// The configured shape changed (size change): revalidate the existing
    /// text against the new shape.
    pub fn set_dims(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.revalidate();
    }

    /// Whether the UI should mark this field with the invalid style class.
    pub fn flagged(&self) -> bool {
        self.touched && !self.valid
    }

    /// Display width for the textarea `cols` attribute: the longest line in
    /// characters, at least 1.
    pub fn display_cols(&self) -> usize {
        self.text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(1)
    }

    fn revalidate(&mut self) {
        self.valid = parse_matrix(&self.text, self.rows, self.cols).is_ok();
    }
}
