//! Encode-latency comparison across encoders.

use crate::encoder::EncoderKind;
use crate::error::CompareError;
use fixture_core::Dataset;
use std::fmt::Write as _;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Harness run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Timed encodes per encoder.
    pub iterations: usize,
    /// Untimed encodes before timing starts.
    pub warmup: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            iterations: 10,
            warmup: 2,
        }
    }
}

/// Latency and size figures for one encoder.
#[derive(Debug, Clone)]
pub struct EncoderMetrics {
    pub encoder: EncoderKind,
    pub payload_bytes: usize,
    pub iterations: usize,
    pub min: Duration,
    pub mean: Duration,
    pub median: Duration,
    pub max: Duration,
}

impl EncoderMetrics {
    pub fn payload_megabytes(&self) -> f64 {
        self.payload_bytes as f64 / BYTES_PER_MEGABYTE
    }

    /// Megabytes encoded per second at the mean latency.
    pub fn megabytes_per_second(&self) -> f64 {
        if self.mean.as_secs_f64() > 0.0 {
            self.payload_megabytes() / self.mean.as_secs_f64()
        } else {
            0.0
        }
    }

    fn from_samples(encoder: EncoderKind, payload_bytes: usize, mut samples: Vec<Duration>) -> Self {
        samples.sort_unstable();
        let iterations = samples.len();
        let total: Duration = samples.iter().sum();

        Self {
            encoder,
            payload_bytes,
            iterations,
            min: samples.first().copied().unwrap_or_default(),
            mean: total / u32::try_from(iterations.max(1)).unwrap_or(u32::MAX),
            median: samples.get(iterations / 2).copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
        }
    }
}

/// Results of one comparison run, in the order encoders were requested.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub user_count: usize,
    pub results: Vec<EncoderMetrics>,
}

impl ComparisonReport {
    pub fn get(&self, encoder: EncoderKind) -> Option<&EncoderMetrics> {
        self.results.iter().find(|m| m.encoder == encoder)
    }

    pub fn fastest(&self) -> Option<&EncoderMetrics> {
        self.results.iter().min_by_key(|m| m.mean)
    }

    pub fn slowest(&self) -> Option<&EncoderMetrics> {
        self.results.iter().max_by_key(|m| m.mean)
    }

    /// How many times faster `encoder` is than the slowest encoder, by mean.
    pub fn speedup(&self, encoder: EncoderKind) -> Option<f64> {
        let slowest = self.slowest()?;
        let metrics = self.get(encoder)?;
        if metrics.mean.is_zero() {
            return None;
        }
        Some(slowest.mean.as_secs_f64() / metrics.mean.as_secs_f64())
    }

    /// Plain-text table, one row per encoder.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "users: {}", self.user_count);
        let _ = writeln!(
            out,
            "{:<12} {:>10} {:>12} {:>12} {:>12} {:>12} {:>8}",
            "encoder", "size (MB)", "min", "mean", "median", "max", "speedup"
        );

        for m in &self.results {
            let speedup = self
                .speedup(m.encoder)
                .map(|s| format!("{s:.2}x"))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "{:<12} {:>10.2} {:>12} {:>12} {:>12} {:>12} {:>8}",
                m.encoder.name(),
                m.payload_megabytes(),
                format!("{:?}", m.min),
                format!("{:?}", m.mean),
                format!("{:?}", m.median),
                format!("{:?}", m.max),
                speedup
            );
        }

        out
    }
}

/// Time every encoder in `encoders` on the same dataset.
///
/// Encoders run one after another on the calling thread.
pub fn compare(
    dataset: &Dataset,
    encoders: &[EncoderKind],
    options: CompareOptions,
) -> Result<ComparisonReport, CompareError> {
    if options.iterations == 0 {
        return Err(CompareError::InvalidArgument(
            "iterations must be at least 1".to_string(),
        ));
    }
    if encoders.is_empty() {
        return Err(CompareError::InvalidArgument(
            "at least one encoder is required".to_string(),
        ));
    }

    info!(
        "Comparing {} encoders on {} users ({} iterations, {} warmup)",
        encoders.len(),
        dataset.user_count(),
        options.iterations,
        options.warmup
    );

    let mut results = Vec::with_capacity(encoders.len());
    for &kind in encoders {
        let encoder = kind.encoder();

        let mut payload_bytes = 0;
        for _ in 0..options.warmup {
            payload_bytes = encoder.encode(dataset)?.len();
        }

        let mut samples = Vec::with_capacity(options.iterations);
        for _ in 0..options.iterations {
            let start = Instant::now();
            let bytes = encoder.encode(dataset)?;
            samples.push(start.elapsed());
            payload_bytes = bytes.len();
        }

        let metrics = EncoderMetrics::from_samples(kind, payload_bytes, samples);
        debug!(
            "{}: {} bytes, mean {:?}",
            kind, metrics.payload_bytes, metrics.mean
        );
        results.push(metrics);
    }

    let report = ComparisonReport {
        user_count: dataset.user_count(),
        results,
    };

    if let (Some(fastest), Some(slowest)) = (report.fastest(), report.slowest()) {
        info!(
            "Comparison complete: fastest {} ({:?}), slowest {} ({:?})",
            fastest.encoder, fastest.mean, slowest.encoder, slowest.mean
        );
    }

    Ok(report)
}
