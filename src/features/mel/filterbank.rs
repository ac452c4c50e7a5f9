//! Triangular mel filter bank
//!
//! Builds `num_filters` triangular filters over the bins of a one-sided spectrum.
//!
//! # Algorithm
//!
//! 1. Place `num_filters + 2` points evenly on the mel scale between
//!    `hertz_to_mels(0)` and `hertz_to_mels(sample_rate)` (both ends included)
//! 2. Map each point back to hertz, then to a bin index:
//!    `floor(v + ulp(v))` with `v = hz * fft_len / sample_rate`; the `ulp` term keeps a
//!    value that lands exactly on a bin boundary from rounding down
//! 3. Correct the grid: colliding indices are pushed forward with a running offset
//!    until the sequence is strictly increasing (see [`correct_grid`])
//! 4. Slide a window of three over the grid: each `(left, center, right)` triple is one
//!    filter
//! 5. Filter `i` rises linearly from 0 at `left` to 1 at `center` and falls back
//!    towards 0 before `right`; the `right` bin itself is outside the filter
//!
//! Note the upper edge is `sample_rate`, not the Nyquist frequency: the bins of a
//! one-sided spectrum of `fft_len` points are spread over the full sample rate.

use super::scale::{hertz_to_mels, mel_to_hertz_slice};
use crate::error::FeatureError;
use crate::math::linspace::linspace;
use crate::math::Matrix;
use crate::spectral::framing::frames;

/// Build the filter bank
///
/// # Arguments
///
/// * `sample_rate` - Sample rate in Hz
/// * `num_filters` - Number of triangular filters (rows)
/// * `fft_len` - Number of spectrum bins (columns), normally `fft_size / 2 + 1`
///
/// # Returns
///
/// `num_filters × fft_len` matrix of filter weights in `[0, 1]`
///
/// # Errors
///
/// Returns `FeatureError::InvalidConfig` if any argument is zero, if
/// `num_filters >= fft_len`, or if the corrected grid runs past `fft_len` (too many
/// filters for the spectrum resolution).
///
/// # Example
///
/// ```
/// use cepstra::features::mel::filterbank::filterbanks;
///
/// let bank = filterbanks(16000, 20, 257)?;
/// assert_eq!(bank.len(), 20);
/// assert!(bank.iter().all(|row| row.len() == 257));
/// # Ok::<(), cepstra::FeatureError>(())
/// ```
pub fn filterbanks(
    sample_rate: u32,
    num_filters: usize,
    fft_len: usize,
) -> Result<Matrix, FeatureError> {
    let grid = filter_grid(sample_rate, num_filters, fft_len)?;

    let mut banks = vec![vec![0.0f32; fft_len]; num_filters];
    for (bank, window) in banks.iter_mut().zip(frames(&grid, 3, 1)) {
        let (left, center, right) = (window[0], window[1], window[2]);

        let rising = linspace(0.0, 1.0, center - left, false);
        bank[left..center].copy_from_slice(&rising);

        let falling = linspace(1.0, 0.0, right - center, false);
        bank[center..right].copy_from_slice(&falling);
    }

    Ok(banks)
}

/// Corrected bin-index grid: `num_filters + 2` strictly increasing indices
///
/// Consecutive triples of the grid are the `(left, center, right)` bins of each
/// filter.
///
/// # Errors
///
/// Same conditions as [`filterbanks`].
pub fn filter_grid(
    sample_rate: u32,
    num_filters: usize,
    fft_len: usize,
) -> Result<Vec<usize>, FeatureError> {
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

    if fft_len == 0 {
        return Err(FeatureError::InvalidConfig(
            "Spectrum length must be > 0".to_string(),
        ));
    }

    // num_filters + 2 strictly increasing points in [0, fft_len]
    if num_filters >= fft_len {
        return Err(FeatureError::InvalidConfig(format!(
            "{} filters do not fit in {} spectrum bins",
            num_filters, fft_len
        )));
    }

    let grid_mels = linspace(
        hertz_to_mels(0.0),
        hertz_to_mels(sample_rate as f32),
        num_filters + 2,
        true,
    );
    let grid_hertz = mel_to_hertz_slice(&grid_mels);
    let grid = correct_grid(&grid_indices(&grid_hertz, fft_len, sample_rate));
    log::trace!("Mel filter grid: {:?}", grid);

    if let Some(&last) = grid.last() {
        if last > fft_len {
            return Err(FeatureError::InvalidConfig(format!(
                "{} filters do not fit in {} spectrum bins (grid ends at bin {})",
                num_filters, fft_len, last
            )));
        }
    }

    Ok(grid)
}

/// Map frequencies in hertz to FFT bin indices (uncorrected)
pub fn grid_indices(grid_hertz: &[f32], fft_len: usize, sample_rate: u32) -> Vec<usize> {
    grid_hertz
        .iter()
        .map(|&hz| {
            let value = hz * fft_len as f32 / sample_rate as f32;
            (value + ulp(value)) as usize
        })
        .collect()
}

/// Push colliding grid points forward so the grid is strictly increasing
///
/// Walks the grid with a running offset. For point `x[i]` with original predecessor
/// `prev` (`x[0] - 1` for the first point):
///
/// ```text
/// offset = max(0, offset + prev + 1 - x[i])
/// out[i] = x[i] + offset
/// ```
///
/// A repeated index raises the offset by one; a gap wider than one bin gives it back.
/// Each point moves by the least amount that keeps it above its corrected predecessor.
///
/// # Example
///
/// ```
/// use cepstra::features::mel::filterbank::correct_grid;
///
/// assert_eq!(correct_grid(&[0, 0, 0, 5, 6]), vec![0, 1, 2, 5, 6]);
/// assert_eq!(correct_grid(&[0, 0, 0, 0, 2]), vec![0, 1, 2, 3, 4]);
/// ```
pub fn correct_grid(x: &[usize]) -> Vec<usize> {
    let Some(&first) = x.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(x.len());
    let mut offset: i64 = 0;
    let mut prev = first as i64 - 1;
    for &point in x {
        let value = point as i64;
        offset = (offset + prev + 1 - value).max(0);
        out.push((value + offset) as usize);
        prev = value;
    }
    out
}

/// Distance from `|v|` to the next representable `f32` of larger magnitude
fn ulp(v: f32) -> f32 {
    let a = v.abs();
    if !a.is_finite() {
        return a;
    }
    if a == f32::MAX {
        return a - f32::from_bits(a.to_bits() - 1);
    }
    f32::from_bits(a.to_bits() + 1) - a
}
