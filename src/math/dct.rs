//! Type II discrete cosine transform
//!
//! Unnormalised form:
//!
//! ```text
//!            N-1
//! y[k] = 2 * sum x[n] * cos(pi * k * (2n + 1) / (2N)),   0 <= k < N
//!            n=0
//! ```
//!
//! With orthonormal scaling `y[0]` is multiplied by `sqrt(1 / (4N))` and every other
//! coefficient by `sqrt(1 / (2N))`, which matches `scipy.fftpack.dct(x, norm="ortho")`.
//!
//! The cosine and square root are evaluated in `f64` and accumulated into an `f32`
//! sum. Models trained on these features are sensitive to the exact values, so no
//! fast approximations and no FFT-based shortcut.

use super::Matrix;

/// 1D DCT-II of `x`
///
/// Returns a vector of the same length as `x`; an empty input gives an empty output.
///
/// # Example
///
/// ```
/// use cepstra::math::dct::dct;
///
/// let y = dct(&[1.0, 2.0, 3.0, 4.0], false);
/// assert!((y[0] - 20.0).abs() < 1e-5);
/// assert!((y[1] + 6.308_644).abs() < 1e-4);
/// ```
pub fn dct(x: &[f32], ortho: bool) -> Vec<f32> {
    let n_len = x.len();
    let two_n = f64::from(2.0 * n_len as f32);
    let ortho_dc = f64::from(1.0 / (4.0 * n_len as f32)).sqrt();
    let ortho_ac = f64::from(1.0 / (2.0 * n_len as f32)).sqrt();

    let mut y = Vec::with_capacity(n_len);
    for k in 0..n_len {
        let mut sum = 0.0f32;
        for (n, &value) in x.iter().enumerate() {
            let angle = std::f64::consts::PI * k as f64 * f64::from(2.0 * n as f32 + 1.0) / two_n;
            sum = (f64::from(sum) + f64::from(value) * angle.cos()) as f32;
        }

        let mut coeff = 2.0 * sum;
        if ortho {
            let scale = if k == 0 { ortho_dc } else { ortho_ac };
            coeff = (f64::from(coeff) * scale) as f32;
        }
        y.push(coeff);
    }
    y
}

/// Row-wise DCT-II: applies [`dct`] to every row independently
pub fn dct_2d(rows: &[Vec<f32>], ortho: bool) -> Matrix {
    rows.iter().map(|row| dct(row, ortho)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_dct_dc_term_is_twice_sum() {
        let x = vec![0.5, -1.25, 3.0, 2.0, 0.0, 7.5];
        let y = dct(&x, false);
        let expected = 2.0 * x.iter().sum::<f32>();
        assert!((y[0] - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_dct_known_values() {
        // scipy.fftpack.dct([1, 2, 3, 4]) = [20, -6.3086, 0, -0.4483]
        let y = dct(&[1.0, 2.0, 3.0, 4.0], false);
        let expected = [20.0, -6.308_644, 0.0, -0.448_341_5];
        for (got, want) in y.iter().zip(expected.iter()) {
            assert!((got - want).abs() < TOLERANCE, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_dct_is_linear() {
        let x = vec![1.0, -2.0, 0.5, 4.0, 3.0];
        let z = vec![0.25, 0.0, -1.5, 2.0, -0.75];
        let (a, b) = (2.0f32, -0.5f32);

        let combined: Vec<f32> = x.iter().zip(&z).map(|(p, q)| a * p + b * q).collect();
        let lhs = dct(&combined, false);
        let dx = dct(&x, false);
        let dz = dct(&z, false);

        for k in 0..x.len() {
            let rhs = a * dx[k] + b * dz[k];
            assert!((lhs[k] - rhs).abs() < TOLERANCE, "k={}: {} vs {}", k, lhs[k], rhs);
        }
    }

    #[test]
    fn test_dct_ortho_preserves_energy() {
        let x = vec![3.0, -1.0, 4.0, 1.0, -5.0, 9.0, 2.0, -6.0];
        let y = dct(&x, true);
        let energy_in: f32 = x.iter().map(|v| v * v).sum();
        let energy_out: f32 = y.iter().map(|v| v * v).sum();
        assert!((energy_in - energy_out).abs() < 1e-3 * energy_in);
    }

    #[test]
    fn test_dct_ortho_scaling() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let raw = dct(&x, false);
        let ortho = dct(&x, true);
        assert!((ortho[0] - raw[0] * (1.0f32 / 16.0).sqrt()).abs() < TOLERANCE);
        assert!((ortho[1] - raw[1] * (1.0f32 / 8.0).sqrt()).abs() < TOLERANCE);
    }

    #[test]
    fn test_dct_empty() {
        assert!(dct(&[], true).is_empty());
    }

    #[test]
    fn test_dct_2d_rows_independent() {
        let rows = vec![vec![1.0, 2.0, 3.0, 4.0], vec![0.0, 0.0, 0.0, 0.0]];
        let out = dct_2d(&rows, true);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], dct(&rows[0], true));
        assert!(out[1].iter().all(|&v| v == 0.0));
    }
}
