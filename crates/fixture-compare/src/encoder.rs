//! Payload encoders compared by the harness.

use crate::error::CompareError;
use fixture_core::Dataset;
use std::fmt;
use std::str::FromStr;

/// One way of turning a dataset into bytes.
pub trait PayloadEncoder {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// MIME type of the encoded payload.
    fn content_type(&self) -> &'static str;

    fn encode(&self, dataset: &Dataset) -> Result<Vec<u8>, CompareError>;
}

/// Compact JSON straight from the typed structs.
pub struct TypedJsonEncoder;

impl PayloadEncoder for TypedJsonEncoder {
    fn name(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, dataset: &Dataset) -> Result<Vec<u8>, CompareError> {
        Ok(serde_json::to_vec(dataset)?)
    }
}

/// Compact JSON via an intermediate generic `serde_json::Value` tree.
///
/// Pays for building a map-of-maps before writing, the way a host holding
/// the dataset as untyped dictionaries would.
pub struct ValueJsonEncoder;

impl PayloadEncoder for ValueJsonEncoder {
    fn name(&self) -> &'static str {
        "json-value"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, dataset: &Dataset) -> Result<Vec<u8>, CompareError> {
        let value = dataset.to_json_value()?;
        Ok(serde_json::to_vec(&value)?)
    }
}

/// Indented JSON.
pub struct PrettyJsonEncoder;

impl PayloadEncoder for PrettyJsonEncoder {
    fn name(&self) -> &'static str {
        "json-pretty"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, dataset: &Dataset) -> Result<Vec<u8>, CompareError> {
        Ok(serde_json::to_vec_pretty(dataset)?)
    }
}

pub struct YamlEncoder;

impl PayloadEncoder for YamlEncoder {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn content_type(&self) -> &'static str {
        "application/yaml"
    }

    fn encode(&self, dataset: &Dataset) -> Result<Vec<u8>, CompareError> {
        Ok(serde_yaml::to_string(dataset)?.into_bytes())
    }
}

/// Selector for the built-in encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncoderKind {
    Json,
    JsonValue,
    JsonPretty,
    Yaml,
}

impl EncoderKind {
    pub const ALL: [EncoderKind; 4] = [
        EncoderKind::Json,
        EncoderKind::JsonValue,
        EncoderKind::JsonPretty,
        EncoderKind::Yaml,
    ];

    pub fn encoder(self) -> Box<dyn PayloadEncoder> {
        match self {
            EncoderKind::Json => Box::new(TypedJsonEncoder),
            EncoderKind::JsonValue => Box::new(ValueJsonEncoder),
            EncoderKind::JsonPretty => Box::new(PrettyJsonEncoder),
            EncoderKind::Yaml => Box::new(YamlEncoder),
        }
    }

    pub fn name(self) -> &'static str {
        self.encoder().name()
    }

    /// File extension for exports.
    pub fn extension(self) -> &'static str {
        match self {
            EncoderKind::Json | EncoderKind::JsonValue | EncoderKind::JsonPretty => "json",
            EncoderKind::Yaml => "yaml",
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncoderKind {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EncoderKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| CompareError::UnknownEncoder(s.to_string()))
    }
}
