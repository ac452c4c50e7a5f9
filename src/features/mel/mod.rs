//! Mel-scale modules
//!
//! - Hertz / mel conversion
//! - Triangular filter bank placed on FFT bin indices

pub mod filterbank;
pub mod scale;
