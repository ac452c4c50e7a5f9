//! Numeric building blocks
//!
//! Small dense helpers the spectral and mel stages are built from:
//! - Evenly spaced sequences
//! - Type II discrete cosine transform
//! - Row-major matrix product, transpose and row sums
//! - Guarded logarithm

pub mod dct;
pub mod linspace;
pub mod log;
pub mod matrix;

/// Row-major dense matrix, one `Vec` per row
pub type Matrix = Vec<Vec<f32>>;
