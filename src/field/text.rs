/// Matrix text parsing and formatting.
///
/// The textual form of a matrix is newline-delimited rows of
/// whitespace-separated decimal tokens. A token is digits with at most one
/// `.` or `,` between integer and fractional digits — no sign, no exponent,
/// no bare leading separator. `,` is accepted as a decimal separator and
/// parsed as the decimal point.

use std::fmt;

use crate::math::matrix::Matrix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixTextError {
    /// Wrong number of lines.
    RowCount { expected: usize, found: usize },
    /// Wrong number of tokens on one line (1-based line index).
    TokenCount { line: usize, expected: usize, found: usize },
    /// A token that does not match the decimal-number pattern.
    BadToken { line: usize, token: String },
}

impl fmt::Display for MatrixTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixTextError::RowCount { expected, found } => {
                write!(f, "expected {} rows, found {}", expected, found)
            }
            MatrixTextError::TokenCount { line, expected, found } => {
                write!(f, "line {}: expected {} values, found {}", line, expected, found)
            }
            MatrixTextError::BadToken { line, token } => {
                write!(f, "line {}: '{}' is not a valid number", line, token)
            }
        }
    }
}

impl std::error::Error for MatrixTextError {}

/// Parses matrix text against an exact `rows × cols` shape.
///
/// A single trailing newline is tolerated (`str::lines` semantics); tokens
/// within a line may be separated by any run of blanks.
pub fn parse_matrix(text: &str, rows: usize, cols: usize) -> Result<Matrix, MatrixTextError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != rows {
        return Err(MatrixTextError::RowCount { expected: rows, found: lines.len() });
    }

    let mut data = Vec::with_capacity(rows);
    for (i, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != cols {
            return Err(MatrixTextError::TokenCount {
                line: i + 1,
                expected: cols,
                found: tokens.len(),
            });
        }

        let mut row = Vec::with_capacity(cols);
        for token in tokens {
            let value = parse_token(token).ok_or_else(|| MatrixTextError::BadToken {
                line: i + 1,
                token: token.to_owned(),
            })?;
            row.push(value);
        }
        data.push(row);
    }

    Ok(Matrix { rows, cols, data })
}

/// Formats a matrix back into its textual form: rows joined with `\n`,
/// values within a row joined with a single space.
pub fn format_matrix(matrix: &Matrix) -> String {
    matrix
        .data
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a value rounded to 3 decimals with trailing zeros stripped
/// (`0.2`, not `0.200`; `1`, not `1.000`).
pub fn display_rounded(value: f64) -> String {
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Matches `(\d+[.,])?\d+`: digits, optionally one `.` or `,` separating
/// integer and fractional digits. Both parts must be non-empty.
fn parse_token(token: &str) -> Option<f64> {
    let (int_part, frac_part) = match token.find(['.', ',']) {
        Some(pos) => (&token[..pos], Some(&token[pos + 1..])),
        None => (token, None),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    token.replace(',', ".").parse().ok()
}
