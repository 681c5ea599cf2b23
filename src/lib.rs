//! payload-fixtures library
//!
//! Synthetic user-dataset fixtures for exercising serialization layers.
//!
//! # Features
//!
//! - Two built-in dataset presets (`small`, `large`) with distinct shapes
//! - YAML shape files layered over a preset
//! - Reproducible generation from a seed, or fresh entropy per run
//! - Encode-latency comparison across JSON and YAML encoders
//!
//! # Crates
//!
//! - `fixture_core` - dataset model, presets, shapes
//! - `fixture_generator` - dataset generation
//! - `fixture_compare` - encoders, comparison harness, export
//!
//! # CLI Usage
//!
//! ```bash
//! # Write the large preset (1800 users) to a file
//! payload-fixtures generate --preset large --output users.json
//!
//! # Compare encoders on the small preset
//! payload-fixtures compare --preset small --iterations 20 --encoders json-value,json
//!
//! # Dump a preset as a shape file to customize
//! payload-fixtures presets --preset large > shape.yaml
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fixture_compare::EncoderKind;
use fixture_core::{Dataset, DatasetShape, Preset};
use fixture_generator::DatasetGenerator;
use std::path::PathBuf;

pub use fixture_compare as compare;
pub use fixture_core as model;
pub use fixture_generator as generator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// 200-char bios, 10 friends, 5 transactions, summary + config
    #[value(name = "small")]
    Small,
    /// 500-char bios, 20 friends, 10 transactions, flat generated_at
    #[value(name = "large")]
    Large,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Small => Preset::Small,
            PresetArg::Large => Preset::Large,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EncoderArg {
    /// Compact JSON from typed structs
    #[value(name = "json")]
    Json,
    /// Compact JSON through a generic value tree
    #[value(name = "json-value")]
    JsonValue,
    /// Indented JSON
    #[value(name = "json-pretty")]
    JsonPretty,
    /// YAML
    #[value(name = "yaml")]
    Yaml,
}

impl From<EncoderArg> for EncoderKind {
    fn from(arg: EncoderArg) -> Self {
        match arg {
            EncoderArg::Json => EncoderKind::Json,
            EncoderArg::JsonValue => EncoderKind::JsonValue,
            EncoderArg::JsonPretty => EncoderKind::JsonPretty,
            EncoderArg::Yaml => EncoderKind::Yaml,
        }
    }
}

/// Options selecting what dataset to generate.
#[derive(Parser, Clone, Debug)]
pub struct DatasetOpts {
    /// Dataset preset
    #[arg(long, value_enum, default_value = "small")]
    pub preset: PresetArg,

    /// Number of users (default: 1000 for small, 1800 for large)
    #[arg(long)]
    pub users: Option<usize>,

    /// Random seed for reproducible output (omit for fresh random content)
    #[arg(long, env = "FIXTURE_SEED")]
    pub seed: Option<u64>,

    /// YAML shape file layered over the preset
    #[arg(long, value_name = "PATH")]
    pub shape_file: Option<PathBuf>,
}

impl DatasetOpts {
    pub fn preset(&self) -> Preset {
        self.preset.into()
    }

    pub fn user_count(&self) -> usize {
        self.users
            .unwrap_or_else(|| self.preset().default_user_count())
    }

    /// The preset's shape, with the shape file applied on top if given.
    pub fn shape(&self) -> anyhow::Result<DatasetShape> {
        match &self.shape_file {
            Some(path) => DatasetShape::from_file_with_base(path, self.preset())
                .with_context(|| format!("Failed to load shape file {path:?}")),
            None => Ok(self.preset().shape()),
        }
    }

    pub fn build_generator(&self) -> anyhow::Result<DatasetGenerator> {
        let shape = self.shape()?;
        let generator = match self.seed {
            Some(seed) => DatasetGenerator::new(shape, seed)?,
            None => DatasetGenerator::from_entropy(shape)?,
        };
        Ok(generator)
    }

    pub fn build_dataset(&self) -> anyhow::Result<Dataset> {
        let mut generator = self.build_generator()?;
        Ok(generator.generate(self.user_count()))
    }
}
