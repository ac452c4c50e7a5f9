//! Example: MFCCs for many audio files in parallel
//!
//! Usage:
//!   cargo run --release --example mfcc_batch -- [--jobs N] <file1> <file2> ...
//!
//! Notes:
//! - Files are decoded in parallel, then one pipeline per distinct sample rate is built
//!   and shared read-only by every worker.
//! - Output is one JSON object per line (JSONL) with mean coefficients per file.

mod decode;

use cepstra::FeaturePipeline;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;

#[derive(Debug, Serialize)]
struct FileSummary {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frames: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mean_mfcc: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FileSummary {
    fn failed(file: &str, error: String) -> Self {
        Self {
            file: file.to_string(),
            sample_rate: None,
            frames: None,
            mean_mfcc: None,
            error: Some(error),
        }
    }
}

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn column_means(rows: &[Vec<f32>]) -> Vec<f32> {
    let width = rows.first().map_or(0, Vec::len);
    (0..width)
        .map(|c| rows.iter().map(|row| row[c]).sum::<f32>() / rows.len() as f32)
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let mut jobs: Option<usize> = None;
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--jobs" => {
                let v = args.next().ok_or("--jobs requires a value")?.parse::<usize>()?;
                jobs = Some(std::cmp::max(1, v));
            }
            "--help" | "-h" => {
                eprintln!("Usage: mfcc_batch [--jobs N] <file1> <file2> ...");
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one audio file path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}", paths.len(), jobs);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let decoded: Vec<(String, Result<(Vec<f32>, u32), String>)> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let result = decode::decode_mono(path).map_err(|e| format!("decode failed: {e}"));
                (path.clone(), result)
            })
            .collect()
    });

    let mut pipelines: BTreeMap<u32, (FeaturePipeline, usize)> = BTreeMap::new();
    for (_, result) in &decoded {
        if let Ok((_, sample_rate)) = result {
            if pipelines.contains_key(sample_rate) {
                continue;
            }
            let config = decode::speech_config(*sample_rate);
            let pipeline = FeaturePipeline::from_config(&config)?;
            pipelines.insert(*sample_rate, (pipeline, config.num_coeffs));
        }
    }

    let summaries: Vec<FileSummary> = pool.install(|| {
        decoded
            .par_iter()
            .map(|(path, result)| {
                let (samples, sample_rate) = match result {
                    Ok(ok) => ok,
                    Err(e) => return FileSummary::failed(path, e.clone()),
                };
                let Some((pipeline, num_coeffs)) = pipelines.get(sample_rate) else {
                    return FileSummary::failed(path, "no pipeline for sample rate".to_string());
                };

                match pipeline.mfcc_spec(samples, *num_coeffs) {
                    Ok(mfcc) => FileSummary {
                        file: path.clone(),
                        sample_rate: Some(*sample_rate),
                        frames: Some(mfcc.len()),
                        mean_mfcc: Some(column_means(&mfcc)),
                        error: None,
                    },
                    Err(e) => FileSummary::failed(path, format!("extraction failed: {e}")),
                }
            })
            .collect()
    });

    for summary in &summaries {
        println!("{}", serde_json::to_string(summary)?);
    }

    Ok(())
}
