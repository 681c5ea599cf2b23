//! Dataset shape configuration.
//!
//! A [`DatasetShape`] fixes every structural parameter of a generated
//! dataset: string lengths, collection sizes, numeric ranges and which
//! optional fields are present. Shapes normally come from a [`Preset`], but
//! can also be loaded from YAML:
//!
//! ```yaml
//! base: large          # preset to start from (default: small)
//! bio_length: 1000     # any field below overrides the preset
//! friend_count: 50
//! transaction_dates:
//!   type: random_offset
//!   max_days: 30
//! ```

use crate::preset::{Preset, UnknownPresetError};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::Path;

/// Error type for shape loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// Error reading shape file
    #[error("Failed to read shape file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// `base` names an unknown preset
    #[error(transparent)]
    UnknownPreset(#[from] UnknownPresetError),

    /// A field has a value the generator cannot honor
    #[error("Invalid shape: {0}")]
    Invalid(String),
}

/// Largest magnitude accepted for a money bound.
///
/// Values up to this size survive scaling by 100 for rounding, and the span
/// between two bounds stays finite.
pub const MAX_AMOUNT: f64 = 1e12;

/// Largest day offset accepted for derived timestamps (about 100 years).
pub const MAX_OFFSET_DAYS: u32 = 36_500;

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive floating-point range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    fn check(&self, field: &str) -> Result<(), ShapeError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ShapeError::Invalid(format!("{field} bounds must be finite")));
        }
        if self.min.abs() > MAX_AMOUNT || self.max.abs() > MAX_AMOUNT {
            return Err(ShapeError::Invalid(format!(
                "{field} bounds must be within +/-{MAX_AMOUNT:e}"
            )));
        }
        if self.min > self.max {
            return Err(ShapeError::Invalid(format!(
                "{field}.min ({}) is greater than {field}.max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// How `name` and `email` are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NameStyle {
    /// `User{id}` / `user{id}@example.com`
    Sequential,
    /// Random alphanumeric name and e-mail local part.
    Random {
        #[serde(default = "default_name_length")]
        name_length: usize,
        #[serde(default = "default_email_local_length")]
        email_local_length: usize,
    },
}

fn default_name_length() -> usize {
    100
}

fn default_email_local_length() -> usize {
    20
}

/// How transaction dates are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateMode {
    /// Base date plus a uniform `0..=max_days` day offset.
    RandomOffset { max_days: u32 },
    /// The same literal for every transaction.
    Fixed { value: String },
}

/// Per-user metadata block parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataShape {
    pub tag_count: usize,
    pub tag_length: usize,
    /// `updated_at` is the base date plus `1..=max_update_days` days.
    pub max_update_days: u32,
}

/// What sits next to `users` at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Envelope {
    /// `summary` aggregates plus the static `config` block.
    Summary,
    /// A single flat `generated_at` literal.
    GeneratedAt { value: String },
}

/// Full set of structural parameters for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetShape {
    /// Base for every derived timestamp.
    pub base_date: NaiveDateTime,
    pub name_style: NameStyle,
    /// Emit `is_active` (true for even ids).
    pub activity_flag: bool,
    pub balance: FloatRange,
    pub bio_length: usize,
    pub friend_count: usize,
    pub friend_ids: IntRange,
    /// Pool `settings.language` is drawn from.
    pub languages: Vec<String>,
    /// Emit `settings.preferences`.
    pub preferences: bool,
    pub transaction_count: usize,
    pub transaction_amount: FloatRange,
    pub transaction_dates: DateMode,
    pub description_length: usize,
    pub metadata: Option<MetadataShape>,
    pub envelope: Envelope,
}

impl DatasetShape {
    /// Load a shape from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ShapeError> {
        Self::from_file_with_base(path, Preset::Small)
    }

    /// Load a shape from a YAML file, using `default_base` when the file
    /// has no `base` key.
    pub fn from_file_with_base<P: AsRef<Path>>(
        path: P,
        default_base: Preset,
    ) -> Result<Self, ShapeError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_with_base(&content, default_base)
    }

    /// Parse a shape from YAML.
    ///
    /// The document is layered over the preset named by its `base` key
    /// (`small` when absent), so it only needs to list the fields it changes.
    pub fn from_yaml(yaml: &str) -> Result<Self, ShapeError> {
        Self::from_yaml_with_base(yaml, Preset::Small)
    }

    /// Like [`DatasetShape::from_yaml`] with a caller-chosen fallback base.
    pub fn from_yaml_with_base(yaml: &str, default_base: Preset) -> Result<Self, ShapeError> {
        let mut doc: YamlValue = serde_yaml::from_str(yaml)?;

        let base = match doc.as_mapping_mut().and_then(|m| m.remove("base")) {
            Some(YamlValue::String(tag)) => tag.parse::<Preset>()?,
            Some(other) => {
                return Err(ShapeError::Invalid(format!(
                    "base must be a preset name, got {other:?}"
                )))
            }
            None => default_base,
        };

        let mut merged = serde_yaml::to_value(base.shape())?;
        merge_yaml(&mut merged, doc);

        let shape: DatasetShape = serde_yaml::from_value(merged)?;
        shape.validate()?;
        Ok(shape)
    }

    /// Render the shape as a complete YAML document.
    pub fn to_yaml(&self) -> Result<String, ShapeError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check that the generator can honor every parameter.
    pub fn validate(&self) -> Result<(), ShapeError> {
        self.balance.check("balance")?;
        self.transaction_amount.check("transaction_amount")?;

        if self.friend_ids.min > self.friend_ids.max {
            return Err(ShapeError::Invalid(format!(
                "friend_ids.min ({}) is greater than friend_ids.max ({})",
                self.friend_ids.min, self.friend_ids.max
            )));
        }

        if self.languages.is_empty() {
            return Err(ShapeError::Invalid(
                "languages must contain at least one entry".to_string(),
            ));
        }

        match &self.transaction_dates {
            DateMode::Fixed { value } if value.is_empty() => {
                return Err(ShapeError::Invalid(
                    "transaction_dates.value must not be empty".to_string(),
                ));
            }
            DateMode::RandomOffset { max_days } => {
                self.check_offset("transaction_dates.max_days", *max_days)?;
            }
            DateMode::Fixed { .. } => {}
        }

        if let Some(metadata) = &self.metadata {
            if metadata.max_update_days == 0 {
                return Err(ShapeError::Invalid(
                    "metadata.max_update_days must be at least 1".to_string(),
                ));
            }
            self.check_offset("metadata.max_update_days", metadata.max_update_days)?;
        }

        if let Envelope::GeneratedAt { value } = &self.envelope {
            if value.is_empty() {
                return Err(ShapeError::Invalid(
                    "envelope.value must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// `base_date` plus `days` must be a representable date.
    fn check_offset(&self, field: &str, days: u32) -> Result<(), ShapeError> {
        if days > MAX_OFFSET_DAYS {
            return Err(ShapeError::Invalid(format!(
                "{field} ({days}) exceeds {MAX_OFFSET_DAYS} days"
            )));
        }
        if self
            .base_date
            .checked_add_signed(Duration::days(i64::from(days)))
            .is_none()
        {
            return Err(ShapeError::Invalid(format!(
                "{field} ({days}) runs past the last representable date from base_date {}",
                self.base_date
            )));
        }
        Ok(())
    }
}

/// Overlay `overlay` onto `base`, recursing into mappings present in both.
fn merge_yaml(base: &mut YamlValue, overlay: YamlValue) {
    match (base, overlay) {
        (YamlValue::Mapping(base_map), YamlValue::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing @ YamlValue::Mapping(_)) if value.is_mapping() => {
                        merge_yaml(existing, value)
                    }
                    _ => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (_, YamlValue::Null) => {}
        (base, overlay) => *base = overlay,
    }
}
