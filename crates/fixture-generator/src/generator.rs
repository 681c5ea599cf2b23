//! Main dataset generator.

use crate::generators::numeric::{random_cents, random_ids, round_to_cents};
use crate::generators::string::{random_email, random_string, random_strings};
use crate::generators::timestamp::{format_timestamp, random_day_offset, timestamp_now};
use fixture_core::{
    DateMode, Dataset, DatasetShape, Envelope, FixtureConfig, NameStyle, Preferences, Preset,
    Settings, ShapeError, Summary, Theme, Transaction, UnknownPresetError, User, UserMetadata,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

/// How often progress is logged while generating users.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The shape or another argument cannot be honored
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Preset tag not recognized
    #[error(transparent)]
    UnknownPreset(#[from] UnknownPresetError),
}

impl From<ShapeError> for GeneratorError {
    fn from(err: ShapeError) -> Self {
        GeneratorError::InvalidArgument(err.to_string())
    }
}

/// Generator that fills datasets according to a shape.
///
/// Each generator owns its RNG. Two generators built with the same seed and
/// shape produce identical users.
pub struct DatasetGenerator {
    /// Shape defining lengths, counts and optional fields
    shape: DatasetShape,
    /// Random source private to this generator
    rng: StdRng,
    /// Id of the next user
    index: u64,
}

impl DatasetGenerator {
    /// Create a seeded generator for a custom shape.
    pub fn new(shape: DatasetShape, seed: u64) -> Result<Self, GeneratorError> {
        shape.validate()?;
        Ok(Self::with_rng(shape, StdRng::seed_from_u64(seed)))
    }

    /// Create a generator for a custom shape seeded from OS entropy.
    pub fn from_entropy(shape: DatasetShape) -> Result<Self, GeneratorError> {
        shape.validate()?;
        Ok(Self::with_rng(shape, StdRng::from_entropy()))
    }

    /// Create a seeded generator for a built-in preset.
    pub fn for_preset(preset: Preset, seed: u64) -> Self {
        Self::with_rng(preset.shape(), StdRng::seed_from_u64(seed))
    }

    fn with_rng(shape: DatasetShape, rng: StdRng) -> Self {
        Self {
            shape,
            rng,
            index: 0,
        }
    }

    /// Id the next generated user will get.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the shape.
    pub fn shape(&self) -> &DatasetShape {
        &self.shape
    }

    /// Generate the next user.
    pub fn next_user(&mut self) -> User {
        let user = build_user(&self.shape, &mut self.rng, self.index);
        self.index += 1;
        user
    }

    /// Lazily generate `count` users continuing from the current index.
    pub fn users(&mut self, count: usize) -> UserIterator<'_> {
        UserIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate a complete dataset of `user_count` users.
    ///
    /// Ids restart at 0 for every call; the RNG keeps advancing, so repeated
    /// calls on one generator yield different content.
    pub fn generate(&mut self, user_count: usize) -> Dataset {
        let start = Instant::now();
        self.index = 0;

        let mut users = Vec::with_capacity(user_count);
        for user in self.users(user_count) {
            if user.id > 0 && user.id % PROGRESS_INTERVAL == 0 {
                debug!("Generated {} users", user.id);
            }
            users.push(user);
        }

        let mut dataset = Dataset {
            users,
            summary: None,
            config: None,
            generated_at: None,
        };

        match &self.shape.envelope {
            Envelope::Summary => {
                dataset.summary = Some(Summary {
                    total_users: dataset.user_count() as u64,
                    active_users: dataset.active_user_count() as u64,
                    total_balance: round_to_cents(dataset.users.iter().map(|u| u.balance).sum()),
                    generated_at: timestamp_now(),
                });
                dataset.config = Some(FixtureConfig::default());
            }
            Envelope::GeneratedAt { value } => dataset.generated_at = Some(value.clone()),
        }

        info!(
            "Generated dataset with {} users in {:?}",
            dataset.user_count(),
            start.elapsed()
        );

        dataset
    }
}

/// Iterator that lazily generates users.
pub struct UserIterator<'a> {
    generator: &'a mut DatasetGenerator,
    remaining: usize,
}

impl Iterator for UserIterator<'_> {
    type Item = User;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_user())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for UserIterator<'_> {}

/// Build one user. Every random field is drawn fresh from `rng`.
fn build_user<R: Rng + ?Sized>(shape: &DatasetShape, rng: &mut R, id: u64) -> User {
    let (name, email) = match &shape.name_style {
        NameStyle::Sequential => (format!("User{id}"), format!("user{id}@example.com")),
        NameStyle::Random {
            name_length,
            email_local_length,
        } => (
            random_string(rng, *name_length),
            random_email(rng, *email_local_length),
        ),
    };

    let is_active = shape.activity_flag.then_some(id % 2 == 0);
    let balance = random_cents(rng, shape.balance);
    let bio = random_string(rng, shape.bio_length);
    let friends = random_ids(rng, shape.friend_count, shape.friend_ids);

    let settings = Settings {
        theme: Theme::for_id(id),
        notifications: rng.gen(),
        language: shape.languages.choose(rng).cloned().unwrap_or_default(),
        preferences: shape.preferences.then(|| Preferences {
            emails: rng.gen(),
            sms: rng.gen(),
            push: rng.gen(),
        }),
    };

    let transactions = (0..shape.transaction_count)
        .map(|_| Transaction {
            date: match &shape.transaction_dates {
                DateMode::RandomOffset { max_days } => {
                    random_day_offset(rng, shape.base_date, 0, *max_days)
                }
                DateMode::Fixed { value } => value.clone(),
            },
            amount: random_cents(rng, shape.transaction_amount),
            description: random_string(rng, shape.description_length),
        })
        .collect();

    let metadata = shape.metadata.map(|meta| UserMetadata {
        created_at: format_timestamp(shape.base_date),
        updated_at: random_day_offset(rng, shape.base_date, 1, meta.max_update_days),
        tags: random_strings(rng, meta.tag_count, meta.tag_length),
    });

    User {
        id,
        name,
        email,
        is_active,
        balance,
        bio,
        friends,
        settings,
        transactions,
        metadata,
    }
}

/// Generate a dataset for a preset with a fresh entropy-seeded RNG.
///
/// Safe to call from many threads at once: nothing is shared between calls.
pub fn generate_dataset(user_count: usize, preset: Preset) -> Result<Dataset, GeneratorError> {
    generate_dataset_with_shape(user_count, preset.shape())
}

/// Generate a dataset for a preset given by its tag (`small` or `large`).
pub fn generate_named_dataset(user_count: usize, preset: &str) -> Result<Dataset, GeneratorError> {
    generate_dataset(user_count, preset.parse()?)
}

/// Generate a dataset for a custom shape with a fresh entropy-seeded RNG.
pub fn generate_dataset_with_shape(
    user_count: usize,
    shape: DatasetShape,
) -> Result<Dataset, GeneratorError> {
    let mut generator = DatasetGenerator::from_entropy(shape)?;
    Ok(generator.generate(user_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::timestamp::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;

    #[test]
    fn test_user_count_and_ids() {
        for count in [0, 1, 7, 100] {
            let dataset = generate_dataset(count, Preset::Small).unwrap();
            assert_eq!(dataset.users.len(), count);

            let ids: Vec<u64> = dataset.users.iter().map(|u| u.id).collect();
            let expected: Vec<u64> = (0..count as u64).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn test_small_preset_fields() {
        let mut generator = DatasetGenerator::for_preset(Preset::Small, 42);
        let dataset = generator.generate(50);

        for user in &dataset.users {
            assert_eq!(user.name, format!("User{}", user.id));
            assert_eq!(user.email, format!("user{}@example.com", user.id));
            assert_eq!(user.is_active, Some(user.id % 2 == 0));
            assert!((0.0..=10_000.0).contains(&user.balance));
            assert_eq!(round_to_cents(user.balance), user.balance);
            assert_eq!(user.bio.len(), 200);
            assert_eq!(user.friends.len(), 10);
            assert!(user.friends.iter().all(|f| *f <= 999));
            assert_eq!(user.settings.theme, Theme::for_id(user.id));
            assert!(["en-US", "ko-KR", "es-ES", "fr-FR"]
                .contains(&user.settings.language.as_str()));
            assert!(user.settings.preferences.is_some());
            assert_eq!(user.transactions.len(), 5);

            for tx in &user.transactions {
                assert!((-500.0..=500.0).contains(&tx.amount));
                assert_eq!(round_to_cents(tx.amount), tx.amount);
                assert_eq!(tx.description.len(), 100);
                let date = NaiveDateTime::parse_from_str(&tx.date, TIMESTAMP_FORMAT).unwrap();
                let offset = date - generator.shape().base_date;
                assert!((0..=365).contains(&offset.num_days()));
            }

            let metadata = user.metadata.as_ref().unwrap();
            assert_eq!(metadata.created_at, "2025-01-01T12:00:00Z");
            assert_eq!(metadata.tags.len(), 5);
            assert!(metadata.tags.iter().all(|t| t.len() == 5));
            assert_ne!(metadata.updated_at, metadata.created_at);
        }

        assert!(dataset.summary.is_some());
        assert!(dataset.config.is_some());
        assert!(dataset.generated_at.is_none());
    }

    #[test]
    fn test_large_preset_fields() {
        let mut generator = DatasetGenerator::for_preset(Preset::Large, 7);
        let dataset = generator.generate(20);

        for user in &dataset.users {
            assert_eq!(user.name.len(), 100);
            assert!(user.name.chars().all(|c| c.is_ascii_alphanumeric()));
            assert_eq!(user.email.len(), 20 + "@example.com".len());
            assert!(user.is_active.is_none());
            assert_eq!(user.bio.len(), 500);
            assert_eq!(user.friends.len(), 20);
            assert_eq!(user.settings.theme, Theme::for_id(user.id));
            assert!(user.settings.preferences.is_none());
            assert!(user.metadata.is_none());
            assert_eq!(user.transactions.len(), 10);

            for tx in &user.transactions {
                assert_eq!(tx.date, "2025-01-01");
                assert!((-100.0..=100.0).contains(&tx.amount));
                assert_eq!(tx.description.len(), 200);
            }
        }
    }

    #[test]
    fn test_small_summary_scenario() {
        let dataset = generate_dataset(3, Preset::Small).unwrap();
        let summary = dataset.summary.as_ref().unwrap();

        assert_eq!(dataset.users.len(), 3);
        assert_eq!(summary.total_users, 3);
        assert_eq!(summary.active_users, 2);
        assert_eq!(summary.active_users, dataset.active_user_count() as u64);

        let expected_total = round_to_cents(dataset.users.iter().map(|u| u.balance).sum());
        assert_eq!(summary.total_balance, expected_total);
        assert!(NaiveDateTime::parse_from_str(&summary.generated_at, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(dataset.config, Some(FixtureConfig::default()));
    }

    #[test]
    fn test_empty_large_scenario() {
        let dataset = generate_dataset(0, Preset::Large).unwrap();

        assert!(dataset.users.is_empty());
        assert_eq!(dataset.generated_at.as_deref(), Some("2025-01-01T12:00:00Z"));
        assert!(dataset.summary.is_none());
        assert!(dataset.config.is_none());
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = DatasetGenerator::for_preset(Preset::Small, 42);
        let mut gen2 = DatasetGenerator::for_preset(Preset::Small, 42);

        assert_eq!(gen1.generate(25).users, gen2.generate(25).users);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = DatasetGenerator::for_preset(Preset::Small, 1);
        let mut gen2 = DatasetGenerator::for_preset(Preset::Small, 2);

        let users1 = gen1.generate(10).users;
        let users2 = gen2.generate(10).users;
        assert_ne!(users1[0].bio, users2[0].bio);
    }

    #[test]
    fn test_unseeded_calls_differ() {
        let first = generate_dataset(100, Preset::Small).unwrap();
        let second = generate_dataset(100, Preset::Small).unwrap();

        let bios = |d: &Dataset| d.users.iter().map(|u| u.bio.clone()).collect::<Vec<_>>();
        assert_ne!(bios(&first), bios(&second));
        assert_ne!(first.users[0].bio, second.users[0].bio);
    }

    #[test]
    fn test_widest_money_range_serializes_as_numbers() {
        let shape = DatasetShape::from_yaml(&format!(
            "balance:\n  min: {min:?}\n  max: {max:?}\n",
            min = -fixture_core::MAX_AMOUNT,
            max = fixture_core::MAX_AMOUNT
        ))
        .unwrap();

        let dataset = DatasetGenerator::new(shape, 1).unwrap().generate(20);
        let value = serde_json::to_value(&dataset).unwrap();
        for user in value["users"].as_array().unwrap() {
            assert!(user["balance"].is_f64());
        }
        assert!(value["summary"]["total_balance"].is_f64());

        let decoded: Dataset = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.user_count(), 20);
    }

    #[test]
    fn test_users_are_drawn_independently() {
        let mut generator = DatasetGenerator::for_preset(Preset::Small, 42);
        let dataset = generator.generate(2);
        assert_ne!(dataset.users[0].bio, dataset.users[1].bio);
    }

    #[test]
    fn test_generate_restarts_ids() {
        let mut generator = DatasetGenerator::for_preset(Preset::Small, 42);
        generator.next_user();
        generator.next_user();
        assert_eq!(generator.current_index(), 2);

        let dataset = generator.generate(3);
        assert_eq!(dataset.users[0].id, 0);
        assert_eq!(generator.current_index(), 3);
    }

    #[test]
    fn test_users_iterator() {
        let mut generator = DatasetGenerator::for_preset(Preset::Large, 42);
        let iter = generator.users(4);
        assert_eq!(iter.len(), 4);

        let users: Vec<User> = iter.collect();
        assert_eq!(users.len(), 4);
        assert_eq!(users[3].id, 3);
        assert_eq!(generator.current_index(), 4);
    }

    #[test]
    fn test_named_dataset() {
        let dataset = generate_named_dataset(2, "large").unwrap();
        assert_eq!(dataset.users.len(), 2);

        let result = generate_named_dataset(2, "huge");
        assert!(matches!(result, Err(GeneratorError::UnknownPreset(_))));
    }

    #[test]
    fn test_invalid_shape_rejected() {
        let mut shape = Preset::Small.shape();
        shape.balance.min = 100.0;
        shape.balance.max = 1.0;

        let result = DatasetGenerator::new(shape.clone(), 42);
        assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));

        let result = generate_dataset_with_shape(10, shape);
        assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
    }

    #[test]
    fn test_custom_shape() {
        let shape = DatasetShape::from_yaml(
            r#"
base: large
bio_length: 0
friend_count: 0
transaction_count: 1
envelope:
  type: summary
"#,
        )
        .unwrap();

        let mut generator = DatasetGenerator::new(shape, 42).unwrap();
        let dataset = generator.generate(4);

        assert!(dataset.users.iter().all(|u| u.bio.is_empty()));
        assert!(dataset.users.iter().all(|u| u.friends.is_empty()));
        assert!(dataset.users.iter().all(|u| u.transactions.len() == 1));

        // No activity flag in the large shape, so nobody counts as active.
        let summary = dataset.summary.unwrap();
        assert_eq!(summary.total_users, 4);
        assert_eq!(summary.active_users, 0);
    }

    #[test]
    fn test_json_shape() {
        let dataset = generate_dataset(2, Preset::Small).unwrap();
        let value = serde_json::to_value(&dataset).unwrap();

        let user = &value["users"][0];
        for key in [
            "id",
            "name",
            "email",
            "is_active",
            "balance",
            "bio",
            "friends",
            "settings",
            "transactions",
            "metadata",
        ] {
            assert!(user.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["summary"]["total_users"], 2);
        assert_eq!(value["config"]["version"], "1.0.0");
    }

    #[test]
    fn test_concurrent_generation() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| generate_dataset(50, Preset::Small)))
            .collect();

        for handle in handles {
            let dataset = handle.join().unwrap().unwrap();
            assert_eq!(dataset.users.len(), 50);
            assert_eq!(dataset.summary.unwrap().active_users, 25);
        }
    }
}
