//! Hertz / mel conversion
//!
//! Natural-log form of the mel scale: `mel = 1127 * ln(1 + hz / 700)`, which is the
//! same curve as `2595 * log10(1 + hz / 700)`.

use crate::math::log::safe_log;

/// Convert a frequency in hertz to mels
///
/// Inverse of [`mel_to_hertz`]. Frequencies at or below -700 Hz go through the
/// guarded log instead of producing `NaN`.
#[inline]
pub fn hertz_to_mels(hz: f32) -> f32 {
    1127.0 * safe_log(1.0 + hz / 700.0)
}

/// Convert mels back to hertz
#[inline]
pub fn mel_to_hertz(mel: f32) -> f32 {
    (700.0 * (f64::from(mel / 1127.0).exp() - 1.0)) as f32
}

/// [`mel_to_hertz`] over a slice
pub fn mel_to_hertz_slice(mels: &[f32]) -> Vec<f32> {
    mels.iter().map(|&m| mel_to_hertz(m)).collect()
}
