//! Dense row-major matrix helpers
//!
//! Shapes are checked on every call. A mismatch is reported as
//! `FeatureError::ShapeMismatch`; nothing is broadcast or truncated.

use super::Matrix;
use crate::error::FeatureError;

/// Matrix product `a · b`
///
/// `a` is `m × k`, `b` is `k × n`; the result is `m × n`. Accumulation runs over `k`
/// in index order, in `f32`.
///
/// # Errors
///
/// Returns `FeatureError::ShapeMismatch` if any row of `a` does not have exactly
/// `b.len()` columns, or if `b` is ragged.
pub fn dot(a: &[Vec<f32>], b: &[Vec<f32>]) -> Result<Matrix, FeatureError> {
    let inner_len = b.len();
    let cols = b.first().map_or(0, Vec::len);

    if let Some(row) = b.iter().find(|row| row.len() != cols) {
        return Err(FeatureError::ShapeMismatch {
            context: "dot (right operand columns)",
            expected: cols,
            actual: row.len(),
        });
    }

    let mut out = Vec::with_capacity(a.len());
    for row in a {
        if row.len() != inner_len {
            return Err(FeatureError::ShapeMismatch {
                context: "dot (left columns vs right rows)",
                expected: inner_len,
                actual: row.len(),
            });
        }

        let mut out_row = vec![0.0f32; cols];
        for (j, cell) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (k, &value) in row.iter().enumerate() {
                sum += value * b[k][j];
            }
            *cell = sum;
        }
        out.push(out_row);
    }

    Ok(out)
}

/// Inner product of two vectors of equal length
///
/// # Errors
///
/// Returns `FeatureError::ShapeMismatch` if the lengths differ.
pub fn inner(x: &[f32], y: &[f32]) -> Result<f32, FeatureError> {
    if x.len() != y.len() {
        return Err(FeatureError::ShapeMismatch {
            context: "inner",
            expected: x.len(),
            actual: y.len(),
        });
    }
    Ok(x.iter().zip(y).fold(0.0f32, |acc, (p, q)| acc + p * q))
}

/// Transpose of a rectangular matrix
///
/// An empty matrix transposes to an empty matrix.
///
/// # Errors
///
/// Returns `FeatureError::ShapeMismatch` if rows have different lengths.
pub fn transpose(m: &[Vec<f32>]) -> Result<Matrix, FeatureError> {
    let cols = m.first().map_or(0, Vec::len);
    let mut out = vec![Vec::with_capacity(m.len()); cols];

    for row in m {
        if row.len() != cols {
            return Err(FeatureError::ShapeMismatch {
                context: "transpose",
                expected: cols,
                actual: row.len(),
            });
        }
        for (column, &value) in out.iter_mut().zip(row) {
            column.push(value);
        }
    }

    Ok(out)
}

/// Sum of each row; rows may have any length
pub fn row_sums(m: &[Vec<f32>]) -> Vec<f32> {
    m.iter()
        .map(|row| row.iter().fold(0.0f32, |acc, &v| acc + v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_basic() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let b = vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, -1.0]];
        let c = dot(&a, &b).unwrap();
        assert_eq!(
            c,
            vec![
                vec![1.0, 2.0, 0.0],
                vec![3.0, 4.0, 2.0],
                vec![5.0, 6.0, 4.0]
            ]
        );
    }

    #[test]
    fn test_dot_shape_mismatch() {
        let a = vec![vec![1.0, 2.0, 3.0]];
        let b = vec![vec![1.0], vec![2.0]];
        let err = dot(&a, &b).unwrap_err();
        assert_eq!(
            err,
            FeatureError::ShapeMismatch {
                context: "dot (left columns vs right rows)",
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_dot_ragged_right_operand() {
        let a = vec![vec![1.0, 2.0]];
        let b = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            dot(&a, &b),
            Err(FeatureError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_dot_empty_left() {
        let b = vec![vec![1.0, 2.0]];
        assert!(dot(&[], &b).unwrap().is_empty());
    }

    #[test]
    fn test_transpose() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let t = transpose(&m).unwrap();
        assert_eq!(t, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        assert_eq!(transpose(&t).unwrap(), m);
    }

    #[test]
    fn test_transpose_ragged() {
        let m = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(transpose(&m).is_err());
    }

    #[test]
    fn test_inner() {
        assert_eq!(inner(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert!(inner(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_row_sums() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![], vec![-1.0, 1.0]];
        assert_eq!(row_sums(&m), vec![6.0, 0.0, 0.0]);
    }
}
