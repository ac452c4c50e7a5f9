//! Power spectrogram
//!
//! Each frame is transformed with a [`RealFft`] and reduced to
//! `(re² + im²) / fft_size` per bin. The result has one row per frame and
//! `fft_size / 2 + 1` columns.
//!
//! # Example
//!
//! ```
//! use cepstra::spectral::power::power_spec;
//!
//! let audio = vec![0.0f32; 1600];
//! let spec = power_spec(&audio, 400, 160, 512)?;
//! assert_eq!(spec.len(), 8);
//! assert_eq!(spec[0].len(), 257);
//! # Ok::<(), cepstra::FeatureError>(())
//! ```

use super::fft::{RealFft, RustFftTransform};
use super::framing::{frame_count, frames};
use crate::config::validate_framing;
use crate::error::FeatureError;
use crate::math::Matrix;

/// Compute the power spectrogram of `audio`
///
/// Plans a fresh FFT for the call; use [`power_spec_with`] or
/// [`FeaturePipeline::power_spec`](crate::FeaturePipeline::power_spec) to reuse one.
///
/// # Errors
///
/// Returns `FeatureError::InvalidInput` if a size is zero, `hop_size > window_size`,
/// or `audio` is shorter than one window.
pub fn power_spec(
    audio: &[f32],
    window_size: usize,
    hop_size: usize,
    fft_size: usize,
) -> Result<Matrix, FeatureError> {
    validate_framing(window_size, hop_size, fft_size)?;
    let transform = RustFftTransform::new(fft_size)?;
    power_spec_with(&transform, audio, window_size, hop_size)
}

/// Compute the power spectrogram of `audio` with an existing transform
///
/// # Errors
///
/// Same conditions as [`power_spec`], plus any error the transform reports, or a
/// spectrum whose length is not `fft_size / 2 + 1`.
pub fn power_spec_with<F: RealFft + ?Sized>(
    fft: &F,
    audio: &[f32],
    window_size: usize,
    hop_size: usize,
) -> Result<Matrix, FeatureError> {
    let fft_size = fft.fft_size();
    validate_framing(window_size, hop_size, fft_size)?;

    if audio.len() < window_size {
        return Err(FeatureError::InvalidInput(format!(
            "Audio has {} samples, shorter than one window of {}",
            audio.len(),
            window_size
        )));
    }

    if window_size > fft_size {
        log::warn!(
            "Window of {} samples exceeds FFT size {}; frames are truncated",
            window_size,
            fft_size
        );
    }

    let num_frames = frame_count(audio.len(), window_size, hop_size);
    let bins = fft_size / 2 + 1;
    log::debug!(
        "Power spectrogram: {} samples, window={}, hop={}, fft={} -> {} frames x {} bins",
        audio.len(),
        window_size,
        hop_size,
        fft_size,
        num_frames,
        bins
    );

    let mut out = Vec::with_capacity(num_frames);
    for frame in frames(audio, window_size, hop_size) {
        let spectrum = fft.rfft(frame)?;
        if spectrum.real.len() != bins || spectrum.imag.len() != bins {
            return Err(FeatureError::ShapeMismatch {
                context: "rfft output",
                expected: bins,
                actual: spectrum.real.len().min(spectrum.imag.len()),
            });
        }
        out.push(spectrum.power(fft_size));
    }

    Ok(out)
}
