//! Serialization comparison harness for payload-fixtures.
//!
//! This crate encodes generated datasets with several encoders and reports
//! payload size and encode latency for each, and writes encoded datasets to
//! files.
//!
//! # Example
//!
//! ```ignore
//! use fixture_compare::{compare, CompareOptions, EncoderKind};
//! use fixture_generator::generate_dataset;
//! use fixture_core::Preset;
//!
//! let dataset = generate_dataset(1800, Preset::Large)?;
//! let report = compare(
//!     &dataset,
//!     &[EncoderKind::JsonValue, EncoderKind::Json],
//!     CompareOptions::default(),
//! )?;
//! println!("{}", report.render_table());
//! ```

pub mod encoder;
pub mod error;
pub mod export;
pub mod harness;

pub use encoder::{
    EncoderKind, PayloadEncoder, PrettyJsonEncoder, TypedJsonEncoder, ValueJsonEncoder,
    YamlEncoder,
};
pub use error::CompareError;
pub use export::{export_dataset, write_dataset, ExportMetrics};
pub use harness::{compare, CompareOptions, ComparisonReport, EncoderMetrics};
