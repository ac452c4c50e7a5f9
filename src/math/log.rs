//! Guarded natural logarithm
//!
//! Non-positive inputs are replaced by `f32::EPSILON` (the gap between 1.0 and the
//! next representable `f32`) before taking the log, so silent frames produce a large
//! negative finite value (about -15.94) instead of `-inf` or `NaN`.

use super::Matrix;

/// Smallest value the logarithm is ever taken of
pub const LOG_FLOOR: f32 = f32::EPSILON;

/// `ln(x)` for `x > 0`, `ln(f32::EPSILON)` otherwise
///
/// `NaN` input still yields `NaN`.
///
/// # Example
///
/// ```
/// use cepstra::math::log::safe_log;
///
/// assert_eq!(safe_log(1.0), 0.0);
/// assert!(safe_log(0.0).is_finite());
/// assert_eq!(safe_log(0.0), safe_log(-3.0));
/// ```
#[inline]
pub fn safe_log(x: f32) -> f32 {
    let x = if x <= 0.0 { LOG_FLOOR } else { x };
    f64::from(x).ln() as f32
}

/// Element-wise [`safe_log`] over a slice
pub fn safe_log_slice(x: &[f32]) -> Vec<f32> {
    x.iter().map(|&v| safe_log(v)).collect()
}

/// Element-wise [`safe_log`] over every row of a matrix
pub fn safe_log_matrix(x: &[Vec<f32>]) -> Matrix {
    x.iter().map(|row| safe_log_slice(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_log_matches_ln_above_floor() {
        for &x in &[2.0 * f32::EPSILON, 1e-3, 0.5, 1.0, 2.0, 1234.5, 1e30] {
            let expected = f64::from(x).ln() as f32;
            assert_eq!(safe_log(x), expected, "x = {}", x);
        }
    }

    #[test]
    fn test_safe_log_never_nan_or_neg_inf_for_finite() {
        for &x in &[0.0, -0.0, -1.0, -1e30, f32::MIN, f32::MIN_POSITIVE, 1e-45] {
            let y = safe_log(x);
            assert!(y.is_finite(), "safe_log({}) = {}", x, y);
        }
    }

    #[test]
    fn test_safe_log_floor_value() {
        let floor = safe_log(0.0);
        assert!((floor - (-15.942_385)).abs() < 1e-4);
        assert_eq!(safe_log(-42.0), floor);
    }

    #[test]
    fn test_safe_log_matrix_shape() {
        let m = vec![vec![1.0, 0.0], vec![std::f32::consts::E, -1.0]];
        let out = safe_log_matrix(&m);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0][0], 0.0);
        assert!((out[1][0] - 1.0).abs() < 1e-6);
        assert_eq!(out[0][1], out[1][1]);
    }
}
