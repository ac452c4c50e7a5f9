//! Configuration parameters for feature extraction

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// Feature extraction configuration
///
/// Fixes everything a [`FeaturePipeline`](crate::FeaturePipeline) needs to build its
/// filter bank, plus the number of cepstral coefficients returned by
/// [`extract_mfcc`](crate::extract_mfcc).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Sample rate in Hz (default: 16000)
    pub sample_rate: u32,

    // Framing
    /// Samples per analysis window (default: 400, 25 ms at 16 kHz)
    pub window_size: usize,

    /// Samples between window starts (default: 160, 10 ms at 16 kHz)
    /// Must not exceed `window_size`
    pub hop_size: usize,

    /// FFT size (default: 512)
    /// Windows shorter than this are zero-padded, longer ones truncated
    pub fft_size: usize,

    // Mel / cepstrum
    /// Number of triangular mel filters (default: 20)
    pub num_filters: usize,

    /// Number of cepstral coefficients kept per frame (default: 13)
    pub num_coeffs: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16000,
            window_size: 400,
            hop_size: 160,
            fft_size: 512,
            num_filters: 20,
            num_coeffs: 13,
        }
    }
}

impl FeatureConfig {
    /// Length of the one-sided spectrum: `fft_size / 2 + 1`
    pub fn spectrum_len(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Check every parameter, including `num_coeffs` against `num_filters`
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::InvalidConfig` naming the first offending parameter.
    pub fn validate(&self) -> Result<(), FeatureError> {
        validate_pipeline_params(
            self.sample_rate,
            self.window_size,
            self.hop_size,
            self.fft_size,
            self.num_filters,
        )?;
        validate_num_coeffs(self.num_coeffs, self.num_filters).map_err(into_config_error)
    }
}

/// Validate the parameters a pipeline instance is built from
pub(crate) fn validate_pipeline_params(
    sample_rate: u32,
    window_size: usize,
    hop_size: usize,
    fft_size: usize,
    num_filters: usize,
) -> Result<(), FeatureError> {
    if sample_rate == 0 {
        return Err(FeatureError::InvalidConfig(
            "Sample rate must be > 0".to_string(),
        ));
    }

    if num_filters == 0 {
        return Err(FeatureError::InvalidConfig(
            "Number of filters must be > 0".to_string(),
        ));
    }

    validate_framing(window_size, hop_size, fft_size).map_err(into_config_error)?;

    // num_filters + 2 strictly increasing grid points must fit in [0, fft_size / 2 + 1]
    let spectrum_len = fft_size / 2 + 1;
    if num_filters >= spectrum_len {
        return Err(FeatureError::InvalidConfig(format!(
            "Number of filters must be < {} for FFT size {}, got {}",
            spectrum_len, fft_size, num_filters
        )));
    }

    Ok(())
}

/// Re-tag a call-time input error as a configuration error
fn into_config_error(err: FeatureError) -> FeatureError {
    match err {
        FeatureError::InvalidInput(msg) => FeatureError::InvalidConfig(msg),
        other => other,
    }
}

/// Validate window / hop / FFT sizes shared by every spectral entry point
pub(crate) fn validate_framing(
    window_size: usize,
    hop_size: usize,
    fft_size: usize,
) -> Result<(), FeatureError> {
    if window_size == 0 {
        return Err(FeatureError::InvalidInput(
            "Window size must be > 0".to_string(),
        ));
    }

    if hop_size == 0 || hop_size > window_size {
        return Err(FeatureError::InvalidInput(format!(
            "Hop size must be in [1, {}], got {}",
            window_size, hop_size
        )));
    }

    if fft_size == 0 {
        return Err(FeatureError::InvalidInput(
            "FFT size must be > 0".to_string(),
        ));
    }

    Ok(())
}

/// `num_coeffs` must lie in `[1, num_filters]`
pub(crate) fn validate_num_coeffs(
    num_coeffs: usize,
    num_filters: usize,
) -> Result<(), FeatureError> {
    if num_coeffs == 0 || num_coeffs > num_filters {
        return Err(FeatureError::InvalidInput(format!(
            "Number of coefficients must be in [1, {}], got {}",
            num_filters, num_coeffs
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FeatureConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spectrum_len(), 257);
    }

    #[test]
    fn test_rejects_zero_filters() {
        let config = FeatureConfig {
            num_filters: 0,
            ..FeatureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FeatureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_hop_larger_than_window() {
        let config = FeatureConfig {
            hop_size: 401,
            ..FeatureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FeatureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_coeffs_out_of_range() {
        let too_many = FeatureConfig {
            num_coeffs: 21,
            ..FeatureConfig::default()
        };
        assert!(too_many.validate().is_err());

        let none = FeatureConfig {
            num_coeffs: 0,
            ..FeatureConfig::default()
        };
        assert!(none.validate().is_err());
    }

    #[test]
    fn test_rejects_filters_beyond_spectrum() {
        let config = FeatureConfig {
            num_filters: 257,
            num_coeffs: 13,
            ..FeatureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FeatureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_deserialized_huge_filter_count() {
        let mut value = serde_json::to_value(FeatureConfig::default()).unwrap();
        value["num_filters"] = serde_json::json!(usize::MAX);
        let config: FeatureConfig = serde_json::from_value(value).unwrap();
        assert_eq!(config.num_filters, usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(FeatureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_serde_field_names() {
        let value = serde_json::to_value(FeatureConfig::default()).unwrap();
        assert_eq!(value["sample_rate"], 16000);
        assert_eq!(value["num_filters"], 20);

        let parsed: FeatureConfig = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, FeatureConfig::default());
    }
}
