//! Core types for the payload-fixtures workspace.
//!
//! This crate provides the foundational types shared by the generator and
//! the comparison harness:
//!
//! - [`Dataset`] - The generated fixture: users plus an envelope
//! - [`User`] - One synthetic user record with nested settings and transactions
//! - [`Preset`] - Named shape bundles (`small`, `large`)
//! - [`DatasetShape`] - Every shape parameter, loadable from YAML
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-generator  (fills a Dataset according to a DatasetShape)
//!    │
//!    └─── fixture-compare    (encodes a Dataset and measures the encoders)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{DatasetShape, Preset};
//!
//! let shape = DatasetShape::from_yaml(r#"
//! base: small
//! bio_length: 64
//! friend_count: 3
//! "#).unwrap();
//!
//! assert_eq!(shape.bio_length, 64);
//! assert_eq!(shape.transaction_count, Preset::Small.shape().transaction_count);
//! ```

pub mod model;
pub mod preset;
pub mod shape;

// Re-exports for convenience
pub use model::{
    Dataset, FeatureFlags, FixtureConfig, Preferences, Settings, Summary, Theme, Transaction,
    User, UserMetadata,
};
pub use preset::{base_date, Preset, UnknownPresetError};
pub use shape::{
    DateMode, DatasetShape, Envelope, FloatRange, IntRange, MetadataShape, NameStyle, ShapeError,
    MAX_AMOUNT, MAX_OFFSET_DAYS,
};
