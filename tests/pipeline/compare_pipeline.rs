//! Generate -> compare encoders.

use fixture_compare::{compare, CompareOptions, EncoderKind};
use fixture_core::Preset;
use fixture_generator::generate_dataset;

#[test]
fn test_compare_both_presets() -> Result<(), Box<dyn std::error::Error>> {
    let options = CompareOptions {
        iterations: 2,
        warmup: 1,
    };

    for preset in Preset::ALL {
        let dataset = generate_dataset(40, preset)?;
        let report = compare(&dataset, &[EncoderKind::JsonValue, EncoderKind::Json], options)?;

        let json = report.get(EncoderKind::Json).ok_or("json missing")?;
        let value = report.get(EncoderKind::JsonValue).ok_or("json-value missing")?;

        // Both JSON paths emit the same document.
        assert_eq!(json.payload_bytes, value.payload_bytes);
        assert!(report.speedup(EncoderKind::Json).is_some());

        let table = report.render_table();
        assert!(table.starts_with("users: 40\n"));
        assert_eq!(table.lines().count(), 4);
    }
    Ok(())
}

#[test]
fn test_large_payload_bigger_than_small_per_user() -> Result<(), Box<dyn std::error::Error>> {
    let options = CompareOptions {
        iterations: 1,
        warmup: 0,
    };

    let small = compare(&generate_dataset(30, Preset::Small)?, &[EncoderKind::Json], options)?;
    let large = compare(&generate_dataset(30, Preset::Large)?, &[EncoderKind::Json], options)?;

    let small_bytes = small.get(EncoderKind::Json).ok_or("missing")?.payload_bytes;
    let large_bytes = large.get(EncoderKind::Json).ok_or("missing")?.payload_bytes;
    assert!(large_bytes > small_bytes);
    Ok(())
}
