//! Generate -> export -> decode.

use fixture_compare::{export_dataset, EncoderKind};
use fixture_core::{Dataset, DatasetShape, Preset};
use fixture_generator::DatasetGenerator;
use tempfile::TempDir;

const SEED: u64 = 42;

#[test]
fn test_export_large_preset_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("fixture_generator=info,fixture_compare=info")
        .try_init()
        .ok();

    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("large.json");

    let dataset = DatasetGenerator::for_preset(Preset::Large, SEED).generate(25);
    let encoder = EncoderKind::Json.encoder();
    let metrics = export_dataset(&dataset, encoder.as_ref(), &path)?;

    let bytes = std::fs::read(&path)?;
    assert_eq!(bytes.len() as u64, metrics.bytes_written);

    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    let root = value.as_object().ok_or("payload is not an object")?;
    assert_eq!(root.len(), 2);
    assert_eq!(value["generated_at"], "2025-01-01T12:00:00Z");
    assert_eq!(value["users"].as_array().map(Vec::len), Some(25));

    let decoded: Dataset = serde_json::from_value(value)?;
    assert_eq!(decoded, dataset);
    Ok(())
}

#[test]
fn test_export_custom_shape() -> Result<(), Box<dyn std::error::Error>> {
    let shape = DatasetShape::from_file("tests/fixtures/custom_shape.yaml")?;
    let mut generator = DatasetGenerator::new(shape, SEED)?;
    let dataset = generator.generate(12);

    for user in &dataset.users {
        assert_eq!(user.bio.len(), 1000);
        assert_eq!(user.friends.len(), 50);
        assert!(user.friends.iter().all(|f| *f < 50));
        assert_eq!(user.transactions.len(), 1);
        assert!(user.transactions[0].date.ends_with("T12:00:00Z"));
        assert!(user.is_active.is_none());
    }

    let summary = dataset.summary.as_ref().ok_or("summary missing")?;
    assert_eq!(summary.total_users, 12);
    assert!(dataset.generated_at.is_none());

    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("custom.yaml");
    let encoder = EncoderKind::Yaml.encoder();
    export_dataset(&dataset, encoder.as_ref(), &path)?;

    let decoded: Dataset = serde_yaml::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(decoded.users, dataset.users);
    Ok(())
}

#[test]
fn test_small_preset_payload_scale() -> Result<(), Box<dyn std::error::Error>> {
    // The small preset was sized at roughly 1.4 MB of compact JSON.
    let dataset = DatasetGenerator::for_preset(Preset::Small, SEED)
        .generate(Preset::Small.default_user_count());
    let bytes = EncoderKind::Json.encoder().encode(&dataset)?;
    let megabytes = bytes.len() as f64 / (1024.0 * 1024.0);

    assert!(
        (1.0..2.0).contains(&megabytes),
        "unexpected payload size {megabytes:.2} MB"
    );
    Ok(())
}
