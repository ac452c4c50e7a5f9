//! Feature extraction modules
//!
//! This module contains the mel-domain stages:
//! - Mel scale conversion and triangular filter bank
//! - Mel spectrogram and MFCC pipeline with a cached filter bank

pub mod mel;
pub mod pipeline;
