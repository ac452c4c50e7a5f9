//! Mel spectrogram and MFCC pipeline
//!
//! A [`FeaturePipeline`] is built once for a fixed `(sample_rate, window_size,
//! hop_size, fft_size, num_filters)` configuration. Construction plans the FFT and
//! computes the filter bank; both are read-only afterwards, so one instance can be
//! shared between threads and reused for any number of buffers. A different
//! configuration needs a different instance.
//!
//! # Stages
//!
//! ```text
//! audio -> frames -> |rfft|² / N -> · filterbankᵀ -> safe_log -> DCT-II (ortho) -> MFCC
//!                      power_spec      mel energies    mel_spec                    mfcc_spec
//! ```
//!
//! Column 0 of the MFCC output is replaced by the log of the frame's total power.
//!
//! # Example
//!
//! ```
//! use cepstra::FeaturePipeline;
//!
//! let pipeline = FeaturePipeline::new(16000, 400, 160, 512, 20)?;
//! let audio: Vec<f32> = (0..16000).map(|i| (i as f32 * 0.05).sin()).collect();
//!
//! let mfcc = pipeline.mfcc_spec(&audio, 13)?;
//! assert_eq!(mfcc.len(), 98);
//! assert_eq!(mfcc[0].len(), 13);
//! # Ok::<(), cepstra::FeatureError>(())
//! ```

use super::mel::filterbank::filterbanks;
use crate::config::{validate_num_coeffs, validate_pipeline_params, FeatureConfig};
use crate::error::FeatureError;
use crate::math::dct::dct_2d;
use crate::math::log::{safe_log_matrix, safe_log_slice};
use crate::math::matrix::{dot, row_sums, transpose};
use crate::math::Matrix;
use crate::spectral::fft::RustFftTransform;
use crate::spectral::power::power_spec_with;

/// Feature extractor with a cached filter bank
#[derive(Debug, Clone)]
pub struct FeaturePipeline {
    sample_rate: u32,
    window_size: usize,
    hop_size: usize,
    fft_size: usize,
    num_filters: usize,
    /// `num_filters × (fft_size / 2 + 1)`
    filterbank: Matrix,
    /// `(fft_size / 2 + 1) × num_filters`, right operand of the mel product
    filterbank_t: Matrix,
    fft: RustFftTransform,
}

impl FeaturePipeline {
    /// Build a pipeline and its filter bank
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::InvalidConfig` if a size or the sample rate is zero,
    /// `hop_size > window_size`, or the filters do not fit in `fft_size / 2 + 1` bins.
    pub fn new(
        sample_rate: u32,
        window_size: usize,
        hop_size: usize,
        fft_size: usize,
        num_filters: usize,
    ) -> Result<Self, FeatureError> {
        validate_pipeline_params(sample_rate, window_size, hop_size, fft_size, num_filters)?;

        let spectrum_len = fft_size / 2 + 1;
        let filterbank = filterbanks(sample_rate, num_filters, spectrum_len)?;
        let filterbank_t = transpose(&filterbank)?;

        if filterbank_t.len() != spectrum_len {
            return Err(FeatureError::ShapeMismatch {
                context: "filter bank columns vs spectrum length",
                expected: spectrum_len,
                actual: filterbank_t.len(),
            });
        }

        if window_size > fft_size {
            log::warn!(
                "Window of {} samples exceeds FFT size {}; frames will be truncated",
                window_size,
                fft_size
            );
        }

        let fft = RustFftTransform::new(fft_size)?;

        log::debug!(
            "Feature pipeline: {} Hz, window={}, hop={}, fft={}, {} filters x {} bins",
            sample_rate,
            window_size,
            hop_size,
            fft_size,
            num_filters,
            spectrum_len
        );

        Ok(Self {
            sample_rate,
            window_size,
            hop_size,
            fft_size,
            num_filters,
            filterbank,
            filterbank_t,
            fft,
        })
    }

    /// Build a pipeline from a [`FeatureConfig`]
    ///
    /// `num_coeffs` is not part of the pipeline; it is passed to [`Self::mfcc_spec`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::new`].
    pub fn from_config(config: &FeatureConfig) -> Result<Self, FeatureError> {
        Self::new(
            config.sample_rate,
            config.window_size,
            config.hop_size,
            config.fft_size,
            config.num_filters,
        )
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Samples per frame
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Samples between frame starts
    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of mel filters
    pub fn num_filters(&self) -> usize {
        self.num_filters
    }

    /// Bins per power spectrum row: `fft_size / 2 + 1`
    pub fn spectrum_len(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// The cached filter bank, `num_filters × spectrum_len`
    pub fn filterbank(&self) -> &[Vec<f32>] {
        &self.filterbank
    }

    /// Power spectrogram with this instance's framing and FFT plan
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::InvalidInput` if `audio` is shorter than one window.
    pub fn power_spec(&self, audio: &[f32]) -> Result<Matrix, FeatureError> {
        power_spec_with(&self.fft, audio, self.window_size, self.hop_size)
    }

    /// Log mel spectrogram, `num_frames × num_filters`
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::InvalidInput` if `audio` is shorter than one window.
    pub fn mel_spec(&self, audio: &[f32]) -> Result<Matrix, FeatureError> {
        let powers = self.power_spec(audio)?;
        let mels = safe_log_matrix(&dot(&powers, &self.filterbank_t)?);

        log::debug!(
            "Mel spectrogram: {} samples -> {} frames x {} filters",
            audio.len(),
            mels.len(),
            self.num_filters
        );

        Ok(mels)
    }

    /// MFCC spectrogram, `num_frames × num_coeffs`
    ///
    /// Orthonormal DCT-II of the log mel spectrogram, truncated to `num_coeffs`
    /// columns. Column 0 of row `i` is `safe_log` of the total power of frame `i`
    /// rather than the DCT's own first coefficient.
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::InvalidInput` if `num_coeffs` is outside
    /// `[1, num_filters]` or `audio` is shorter than one window.
    pub fn mfcc_spec(&self, audio: &[f32], num_coeffs: usize) -> Result<Matrix, FeatureError> {
        validate_num_coeffs(num_coeffs, self.num_filters)?;

        let powers = self.power_spec(audio)?;
        if powers.is_empty() {
            return Err(FeatureError::InvalidInput(
                "Audio produced no frames".to_string(),
            ));
        }

        let mels = safe_log_matrix(&dot(&powers, &self.filterbank_t)?);
        let energies = safe_log_slice(&row_sums(&powers));

        let mut mfccs = dct_2d(&mels, true);
        for (row, &energy) in mfccs.iter_mut().zip(&energies) {
            row.truncate(num_coeffs);
            row[0] = energy;
        }

        log::debug!(
            "MFCC: {} samples -> {} frames x {} coefficients",
            audio.len(),
            mfccs.len(),
            num_coeffs
        );

        Ok(mfccs)
    }
}
