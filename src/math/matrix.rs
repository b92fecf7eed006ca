use std::ops::Mul;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// A `rows × cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![value; cols]; rows],
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data,
        }
    }

    /// Extracts column `col` as a plain vector. An out-of-range column gives
    /// an empty vector, matching the empty-result convention of the forward
    /// pass.
    pub fn column(&self, col: usize) -> Vec<f64> {
        if col >= self.cols {
            return Vec::new();
        }
        self.data.iter().map(|row| row[col]).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 3);
        assert!(m.data.iter().all(|row| row.iter().all(|&x| x == 0.0)));
    }

    #[test]
    fn filled_sets_every_cell() {
        let m = Matrix::filled(3, 3, 0.2);
        assert!(m.data.iter().flatten().all(|&x| x == 0.2));
    }

    #[test]
    fn from_data_infers_shape() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!((m.rows, m.cols), (2, 2));

        let empty = Matrix::from_data(vec![]);
        assert_eq!((empty.rows, empty.cols), (0, 0));
        assert!(empty.is_empty());
    }

    #[test]
    fn column_extracts_values() {
        let m = Matrix::from_data(vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert_eq!(m.column(0), vec![1.0, 2.0, 3.0]);
        assert!(m.column(1).is_empty());
        assert!(Matrix::default().column(0).is_empty());
    }

    #[test]
    fn row_vector_times_matrix() {
        // [1 2] * [[1 2], [3 4]] = [7 10]
        let row = Matrix::from_data(vec![vec![1.0, 2.0]]);
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let res = row * m;
        assert_eq!(res.data, vec![vec![7.0, 10.0]]);
    }
}
