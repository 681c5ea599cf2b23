//! Synthetic dataset generator for payload-fixtures.
//!
//! This crate provides the [`DatasetGenerator`], which fills a
//! [`fixture_core::Dataset`] according to a [`fixture_core::DatasetShape`].
//! The shape fixes the structure; every random field is drawn from an RNG
//! owned by the generator, so concurrent generations never share state.
//!
//! # Architecture
//!
//! ```text
//! Preset / DatasetShape (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ DatasetGenerator │
//! │                  │
//! │  - shape         │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Dataset { users, summary | generated_at }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::Preset;
//! use fixture_generator::{generate_dataset, DatasetGenerator};
//!
//! // Random content, fresh RNG per call
//! let dataset = generate_dataset(3, Preset::Small).unwrap();
//! assert_eq!(dataset.users.len(), 3);
//!
//! // Reproducible content
//! let mut generator = DatasetGenerator::for_preset(Preset::Large, 42);
//! let user = generator.next_user();
//! assert_eq!(user.bio.len(), 500);
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{
    generate_dataset, generate_dataset_with_shape, generate_named_dataset, DatasetGenerator,
    GeneratorError, UserIterator,
};
pub use generators::string::generate_random_string;
