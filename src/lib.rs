//! # Cepstra
//!
//! Audio feature extraction for speech and keyword-spotting front ends: power
//! spectrogram, log mel spectrogram and mel-frequency cepstral coefficients (MFCCs)
//! from a complete in-memory buffer of mono samples.
//!
//! ## Features
//!
//! - **Power spectrogram**: rectangular frames, one-sided FFT, `|X|² / N`
//! - **Mel filter bank**: triangular filters on FFT bin indices, with grid correction
//!   so no filter collapses to zero width
//! - **MFCC**: orthonormal DCT-II of the log mel spectrogram, coefficient 0 replaced
//!   by the log frame energy
//!
//! ## Quick Start
//!
//! ```no_run
//! use cepstra::{extract_mfcc, FeatureConfig};
//!
//! // Mono, f32 samples at the configured sample rate
//! let samples: Vec<f32> = vec![0.0; 16000];
//!
//! let mfcc = extract_mfcc(&samples, &FeatureConfig::default())?;
//! println!("{} frames x {} coefficients", mfcc.len(), mfcc[0].len());
//! # Ok::<(), cepstra::FeatureError>(())
//! ```
//!
//! For repeated calls with one configuration, build a [`FeaturePipeline`] once and
//! reuse it; the filter bank and FFT plan are computed at construction.
//!
//! ## Architecture
//!
//! ```text
//! Audio → Framing → Real FFT → Power → Mel filter bank → Log → DCT-II → MFCC
//! ```
//!
//! All values are `f32`. No resampling, windowing function, pre-emphasis or
//! streaming state: each call processes one whole buffer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod features;
pub mod math;
pub mod spectral;

// Re-export main types
pub use config::FeatureConfig;
pub use error::FeatureError;
pub use features::mel::filterbank::filterbanks;
pub use features::pipeline::FeaturePipeline;
pub use math::Matrix;
pub use spectral::fft::{RealFft, RustFftTransform, Spectrum};
pub use spectral::power::power_spec;

/// One-shot MFCC extraction
///
/// Validates `config`, builds a [`FeaturePipeline`] and runs
/// [`FeaturePipeline::mfcc_spec`] with `config.num_coeffs`. Prefer a long-lived
/// pipeline when processing many buffers with the same configuration.
///
/// # Arguments
///
/// * `samples` - Mono audio samples at `config.sample_rate`
/// * `config` - Framing, filter bank and coefficient parameters
///
/// # Returns
///
/// `num_frames × num_coeffs` matrix
///
/// # Errors
///
/// Returns `FeatureError::InvalidConfig` for an invalid configuration and
/// `FeatureError::InvalidInput` if `samples` is shorter than one window.
///
/// # Example
///
/// ```
/// use cepstra::{extract_mfcc, FeatureConfig};
///
/// let samples = vec![0.0f32; 1600];
/// let mfcc = extract_mfcc(&samples, &FeatureConfig::default())?;
/// assert_eq!(mfcc.len(), 8);
/// assert_eq!(mfcc[0].len(), 13);
/// # Ok::<(), cepstra::FeatureError>(())
/// ```
pub fn extract_mfcc(samples: &[f32], config: &FeatureConfig) -> Result<Matrix, FeatureError> {
    log::debug!(
        "Extracting MFCC: {} samples at {} Hz",
        samples.len(),
        config.sample_rate
    );

    config.validate()?;
    FeaturePipeline::from_config(config)?.mfcc_spec(samples, config.num_coeffs)
}

/// One-shot log mel spectrogram extraction
///
/// # Errors
///
/// Same conditions as [`extract_mfcc`].
pub fn extract_mel(samples: &[f32], config: &FeatureConfig) -> Result<Matrix, FeatureError> {
    config.validate()?;
    FeaturePipeline::from_config(config)?.mel_spec(samples)
}
