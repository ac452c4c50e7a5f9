//! One-sided real-input FFT
//!
//! The rest of the crate only depends on the [`RealFft`] contract: given a real frame,
//! return the real and imaginary parts of bins `0..=fft_size / 2`. The default
//! implementation, [`RustFftTransform`], plans a complex forward transform with
//! `rustfft` once and reuses it for every frame.
//!
//! # Frame length
//!
//! - Shorter than `fft_size`: zero-padded at the end.
//! - Longer than `fft_size`: truncated to the first `fft_size` samples, the same as
//!   `numpy.fft.rfft(frame, n=fft_size)`.

use crate::error::FeatureError;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

/// One-sided spectrum of a real frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    /// Real parts, `fft_size / 2 + 1` bins
    pub real: Vec<f32>,

    /// Imaginary parts, same length as `real`
    pub imag: Vec<f32>,
}

impl Spectrum {
    /// Number of bins
    pub fn len(&self) -> usize {
        self.real.len()
    }

    /// True if the spectrum has no bins
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Periodogram estimate: `(re² + im²) / fft_size` per bin
    pub fn power(&self, fft_size: usize) -> Vec<f32> {
        let scale = fft_size as f32;
        self.real
            .iter()
            .zip(&self.imag)
            .map(|(re, im)| (re * re + im * im) / scale)
            .collect()
    }
}

/// Real-input FFT returning the non-negative-frequency half of the spectrum
///
/// Implementations must be deterministic and safe to share across threads.
pub trait RealFft: Send + Sync {
    /// Transform size the implementation was built for
    fn fft_size(&self) -> usize;

    /// Transform one frame
    ///
    /// Both parts of the returned spectrum have length `fft_size() / 2 + 1`.
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::ProcessingError` if the backend fails.
    fn rfft(&self, frame: &[f32]) -> Result<Spectrum, FeatureError>;
}

/// [`RealFft`] backed by a planned `rustfft` forward transform
#[derive(Clone)]
pub struct RustFftTransform {
    fft_size: usize,
    fft: Arc<dyn Fft<f32>>,
}

impl RustFftTransform {
    /// Plan a forward transform of `fft_size` points
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::InvalidConfig` if `fft_size` is zero.
    pub fn new(fft_size: usize) -> Result<Self, FeatureError> {
        if fft_size == 0 {
            return Err(FeatureError::InvalidConfig(
                "FFT size must be > 0".to_string(),
            ));
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);
        Ok(Self { fft_size, fft })
    }
}

impl fmt::Debug for RustFftTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustFftTransform")
            .field("fft_size", &self.fft_size)
            .finish()
    }
}

impl RealFft for RustFftTransform {
    fn fft_size(&self) -> usize {
        self.fft_size
    }

    fn rfft(&self, frame: &[f32]) -> Result<Spectrum, FeatureError> {
        let n = self.fft_size;

        let mut buffer: Vec<Complex<f32>> = frame
            .iter()
            .take(n)
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        buffer.resize(n, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        let half = &buffer[..n / 2 + 1];
        Ok(Spectrum {
            real: half.iter().map(|c| c.re).collect(),
            imag: half.iter().map(|c| c.im).collect(),
        })
    }
}

/// Stateless form: plan a transform of `fft_size` points and run it on `frame`
///
/// # Errors
///
/// Returns `FeatureError::InvalidConfig` if `fft_size` is zero.
///
/// # Example
///
/// ```
/// use cepstra::spectral::fft::rfft;
///
/// let spectrum = rfft(&[1.0, 1.0, 1.0, 1.0], 8)?;
/// assert_eq!(spectrum.len(), 5);
/// assert!((spectrum.real[0] - 4.0).abs() < 1e-6);
/// # Ok::<(), cepstra::FeatureError>(())
/// ```
pub fn rfft(frame: &[f32], fft_size: usize) -> Result<Spectrum, FeatureError> {
    RustFftTransform::new(fft_size)?.rfft(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_rfft_output_length() {
        for &n in &[1usize, 2, 7, 8, 400, 512] {
            let spectrum = rfft(&vec![0.5; n], n).unwrap();
            assert_eq!(spectrum.real.len(), n / 2 + 1);
            assert_eq!(spectrum.imag.len(), n / 2 + 1);
        }
    }

    #[test]
    fn test_rfft_impulse_is_flat() {
        let mut frame = vec![0.0f32; 16];
        frame[0] = 1.0;
        let spectrum = rfft(&frame, 16).unwrap();
        for (re, im) in spectrum.real.iter().zip(&spectrum.imag) {
            assert!((re - 1.0).abs() < TOLERANCE);
            assert!(im.abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_rfft_cosine_peak() {
        // cos at bin 4 of a 32-point transform: energy N/2 at bin 4, nothing elsewhere
        let n = 32;
        let frame: Vec<f32> = (0..n)
            .map(|i| (2.0 * std::f32::consts::PI * 4.0 * i as f32 / n as f32).cos())
            .collect();
        let spectrum = rfft(&frame, n).unwrap();
        assert!((spectrum.real[4] - 16.0).abs() < 1e-3);
        for (bin, re) in spectrum.real.iter().enumerate() {
            if bin != 4 {
                assert!(re.abs() < 1e-3, "bin {} = {}", bin, re);
            }
        }
    }

    #[test]
    fn test_rfft_zero_pads_short_frame() {
        let short = rfft(&[1.0, 2.0, 3.0], 8).unwrap();
        let padded = rfft(&[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0], 8).unwrap();
        assert_eq!(short, padded);
    }

    #[test]
    fn test_rfft_truncates_long_frame() {
        let long = rfft(&[1.0, 2.0, 3.0, 4.0, 9.0, 9.0], 4).unwrap();
        let head = rfft(&[1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(long, head);
    }

    #[test]
    fn test_rfft_zero_size_rejected() {
        assert!(matches!(
            rfft(&[1.0], 0),
            Err(FeatureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_spectrum_power() {
        let spectrum = Spectrum {
            real: vec![3.0, 0.0],
            imag: vec![4.0, 2.0],
        };
        assert_eq!(spectrum.power(5), vec![5.0, 0.8]);
    }

    #[test]
    fn test_transform_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RustFftTransform>();
    }
}
