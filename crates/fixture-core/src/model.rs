//! Typed representation of a generated fixture.
//!
//! Field order in the structs below is the order in which fields appear in
//! serialized output. Fields that only exist for some shapes are `Option`s
//! and are left out of the output entirely when absent.

use serde::{Deserialize, Serialize};

/// Top-level generated structure.
///
/// A dataset carries either a `summary` + `config` pair or a flat
/// `generated_at` timestamp, depending on the envelope of the shape it was
/// generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Users in id order.
    pub users: Vec<User>,

    /// Aggregate counts over `users`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,

    /// Static feature flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<FixtureConfig>,

    /// Flat generation timestamp used instead of `summary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl Dataset {
    /// Number of user records.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of users flagged active. Users without the flag are not counted.
    pub fn active_user_count(&self) -> usize {
        self.users
            .iter()
            .filter(|u| u.is_active.unwrap_or(false))
            .count()
    }

    /// Convert to a generic JSON tree of maps, arrays and scalars.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// One synthetic user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Rounded to 2 fractional digits.
    pub balance: f64,
    pub bio: String,

    /// Random user ids; may repeat and may point outside the dataset.
    pub friends: Vec<u32>,
    pub settings: Settings,
    pub transactions: Vec<Transaction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<UserMetadata>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Even ids get the dark theme.
    pub fn for_id(id: u64) -> Self {
        if id % 2 == 0 {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub notifications: bool,
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub emails: bool,
    pub sms: bool,
    pub push: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    /// Rounded to 2 fractional digits.
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<String>,
}

/// Aggregates attached to datasets with a summary envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_users: u64,
    pub active_users: u64,
    /// Sum of all balances, rounded to 2 fractional digits.
    pub total_balance: f64,
    pub generated_at: String,
}

/// Static configuration block attached to datasets with a summary envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    pub version: String,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub enable_logging: bool,
    pub max_connections: u32,
    pub supported_languages: Vec<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            features: FeatureFlags {
                enable_logging: true,
                max_connections: 100,
                supported_languages: ["en", "ko", "es", "fr", "de"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        }
    }
}
