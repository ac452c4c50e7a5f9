//! Example: MFCCs for a single audio file
//!
//! Usage:
//!   cargo run --release --example mfcc_file -- <file>
//!
//! Decodes the file, mixes it to mono and prints per-coefficient mean and standard
//! deviation. Set `RUST_LOG=debug` to see the pipeline stages.

mod decode;

use cepstra::FeaturePipeline;
use std::env;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logger
    env_logger::init();

    let path = env::args().nth(1).ok_or("Usage: mfcc_file <file>")?;

    let (samples, sample_rate) = decode::decode_mono(&path)?;
    let config = decode::speech_config(sample_rate);
    println!(
        "{}: {} samples at {} Hz ({:.2}s)",
        path,
        samples.len(),
        sample_rate,
        samples.len() as f32 / sample_rate as f32
    );

    let t0 = Instant::now();
    let pipeline = FeaturePipeline::from_config(&config)?;
    let mfcc = pipeline.mfcc_spec(&samples, config.num_coeffs)?;
    let elapsed_ms = t0.elapsed().as_secs_f32() * 1000.0;

    println!(
        "MFCC: {} frames x {} coefficients in {:.2} ms",
        mfcc.len(),
        config.num_coeffs,
        elapsed_ms
    );

    let frames = mfcc.len() as f32;
    for c in 0..config.num_coeffs {
        let mean = mfcc.iter().map(|row| row[c]).sum::<f32>() / frames;
        let var = mfcc.iter().map(|row| (row[c] - mean).powi(2)).sum::<f32>() / frames;
        println!("  c{:<2}  mean={:>9.3}  std={:>8.3}", c, mean, var.sqrt());
    }

    Ok(())
}
