//! Error types for the feature extraction pipeline

use std::fmt;

/// Errors that can occur during feature extraction
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// Invalid call-time input (audio too short, bad coefficient count, etc.)
    InvalidInput(String),

    /// Invalid pipeline configuration, detected at construction time
    InvalidConfig(String),

    /// Contracted dimensions of a matrix product do not agree
    ShapeMismatch {
        /// Operation that detected the mismatch
        context: &'static str,
        /// Dimension the operation required
        expected: usize,
        /// Dimension it was given
        actual: usize,
    },

    /// Processing error inside a spectral backend
    ///
    /// The built-in rustfft transform never fails; this is for other [`RealFft`]
    /// implementations.
    ///
    /// [`RealFft`]: crate::spectral::fft::RealFft
    ProcessingError(String),
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            FeatureError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            FeatureError::ShapeMismatch {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Shape mismatch in {}: expected dimension {}, got {}",
                context, expected, actual
            ),
            FeatureError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for FeatureError {}
