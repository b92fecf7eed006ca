use std::f64::consts::E;

/// Logistic activation: `1 / (1 + e^-x)`.
///
/// Maps any finite input into (0, 1); `sigmoid(0) == 0.5`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_half() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval() {
        for &x in &[-30.0, -5.0, -0.1, 0.1, 5.0, 30.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({}) = {}", x, y);
        }
    }

    #[test]
    fn sigmoid_is_monotonic() {
        assert!(sigmoid(-1.0) < sigmoid(0.0));
        assert!(sigmoid(0.0) < sigmoid(1.0));
    }
}
