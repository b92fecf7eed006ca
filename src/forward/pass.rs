use crate::activation::activation::sigmoid;
use crate::math::matrix::Matrix;

/// One weighted-sum step: `net[i] = Σ_j vector[j] * weights[j][i]`, the
/// standard row-vector × matrix product.
///
/// Returns an empty vector unless `vector` has `size` entries and `weights`
/// is `size × size` — a dimension mismatch is not an error here, just an
/// empty result for the display columns.
pub fn compute_net(vector: &[f64], weights: &Matrix, size: usize) -> Vec<f64> {
    if vector.len() != size || weights.rows != size || weights.cols != size {
        return Vec::new();
    }

    let row = Matrix::from_data(vec![vector.to_vec()]);
    let product = row * weights.clone();
    product.data.into_iter().next().unwrap_or_default()
}

/// Elementwise sigmoid over a NET vector; empty in, empty out.
pub fn compute_out(net: &[f64]) -> Vec<f64> {
    net.iter().map(|&x| sigmoid(x)).collect()
}
