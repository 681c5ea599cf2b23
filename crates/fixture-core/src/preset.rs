//! Named dataset presets.

use crate::shape::{
    DateMode, DatasetShape, Envelope, FloatRange, IntRange, MetadataShape, NameStyle,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preset name that is neither `small` nor `large`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown preset '{0}' (expected 'small' or 'large')")]
pub struct UnknownPresetError(pub String);

/// A named shape bundle.
///
/// The two presets are distinct payload profiles, not versions of each
/// other: `Large` deliberately has no activity flag, no preferences, no
/// metadata and no summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// ~1.4 MB of JSON at the default user count.
    Small,
    /// ~5.8 MB of JSON at the default user count.
    Large,
}

/// Base date every generated timestamp is derived from: 2025-01-01 12:00:00.
pub fn base_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

const LANGUAGES: [&str; 4] = ["en-US", "ko-KR", "es-ES", "fr-FR"];

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Small, Preset::Large];

    /// User count the preset was sized for.
    pub fn default_user_count(self) -> usize {
        match self {
            Preset::Small => 1000,
            Preset::Large => 1800,
        }
    }

    /// Lower-case tag used in YAML files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Small => "small",
            Preset::Large => "large",
        }
    }

    /// The full shape for this preset.
    pub fn shape(self) -> DatasetShape {
        let base_date = base_date();
        let languages = LANGUAGES.iter().map(|s| s.to_string()).collect();
        let friend_ids = IntRange { min: 0, max: 999 };
        let balance = FloatRange {
            min: 0.0,
            max: 10_000.0,
        };

        match self {
            Preset::Small => DatasetShape {
                base_date,
                name_style: NameStyle::Sequential,
                activity_flag: true,
                balance,
                bio_length: 200,
                friend_count: 10,
                friend_ids,
                languages,
                preferences: true,
                transaction_count: 5,
                transaction_amount: FloatRange {
                    min: -500.0,
                    max: 500.0,
                },
                transaction_dates: DateMode::RandomOffset { max_days: 365 },
                description_length: 100,
                metadata: Some(MetadataShape {
                    tag_count: 5,
                    tag_length: 5,
                    max_update_days: 365,
                }),
                envelope: Envelope::Summary,
            },
            Preset::Large => DatasetShape {
                base_date,
                name_style: NameStyle::Random {
                    name_length: 100,
                    email_local_length: 20,
                },
                activity_flag: false,
                balance,
                bio_length: 500,
                friend_count: 20,
                friend_ids,
                languages,
                preferences: false,
                transaction_count: 10,
                transaction_amount: FloatRange {
                    min: -100.0,
                    max: 100.0,
                },
                transaction_dates: DateMode::Fixed {
                    value: "2025-01-01".to_string(),
                },
                description_length: 200,
                metadata: None,
                envelope: Envelope::GeneratedAt {
                    value: "2025-01-01T12:00:00Z".to_string(),
                },
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = UnknownPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Preset::Small),
            "large" => Ok(Preset::Large),
            _ => Err(UnknownPresetError(s.to_string())),
        }
    }
}
