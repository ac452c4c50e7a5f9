//! Spectral analysis modules
//!
//! From raw samples to a power spectrogram:
//! - Frame segmentation (rectangular windows, fixed hop)
//! - One-sided real-input FFT
//! - Per-frame power spectrum

pub mod fft;
pub mod framing;
pub mod power;
