//! Writing an encoded dataset to a file or stream.

use crate::encoder::PayloadEncoder;
use crate::error::CompareError;
use fixture_core::Dataset;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Default buffer size for export writes.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of bytes written.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent encoding.
    pub encode_duration: Duration,
    /// Time spent writing.
    pub write_duration: Duration,
}

impl ExportMetrics {
    /// Payload size in MiB, the unit the harness reports sizes in.
    pub fn payload_megabytes(&self) -> f64 {
        self.bytes_written as f64 / (1024.0 * 1024.0)
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Encode `dataset` and write it to `writer`, then flush.
pub fn write_dataset<W: Write>(
    dataset: &Dataset,
    encoder: &dyn PayloadEncoder,
    mut writer: W,
) -> Result<ExportMetrics, CompareError> {
    let start_time = Instant::now();

    let encode_start = Instant::now();
    let payload = encoder.encode(dataset)?;
    let encode_duration = encode_start.elapsed();

    let write_start = Instant::now();
    writer.write_all(&payload)?;
    writer.flush()?;
    let write_duration = write_start.elapsed();

    Ok(ExportMetrics {
        bytes_written: payload.len() as u64,
        total_duration: start_time.elapsed(),
        encode_duration,
        write_duration,
    })
}

/// Encode `dataset` into a new file at `output_path`.
///
/// An existing file is truncated.
pub fn export_dataset<P: AsRef<Path>>(
    dataset: &Dataset,
    encoder: &dyn PayloadEncoder,
    output_path: P,
) -> Result<ExportMetrics, CompareError> {
    let output_path = output_path.as_ref();
    info!(
        "Exporting {} users to '{}' as {}",
        dataset.user_count(),
        output_path.display(),
        encoder.name()
    );

    let file = File::create(output_path)?;
    let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut metrics = write_dataset(dataset, encoder, writer)?;

    metrics.bytes_written = std::fs::metadata(output_path)?.len();

    info!(
        "Export complete: {} bytes ({:.2} MB) in {:?}",
        metrics.bytes_written,
        metrics.payload_megabytes(),
        metrics.total_duration
    );

    Ok(metrics)
}
