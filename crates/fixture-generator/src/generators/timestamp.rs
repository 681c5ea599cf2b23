//! Timestamp value generators.
//!
//! Timestamps are rendered as `YYYY-MM-DDTHH:MM:SSZ`.

use chrono::{Duration, NaiveDateTime, Utc};
use rand::Rng;

/// Output format for every generated timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render a timestamp in [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// The current UTC time.
///
/// This is NOT deterministic and is only used for `summary.generated_at`.
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now().naive_utc())
}

/// `base` shifted forward by a uniform `min_days..=max_days` whole days.
///
/// `DatasetShape::validate` rejects offsets that would run past the last
/// representable date, so the fallback to `base` is never taken for a
/// validated shape.
pub fn random_day_offset<R: Rng + ?Sized>(
    rng: &mut R,
    base: NaiveDateTime,
    min_days: u32,
    max_days: u32,
) -> String {
    let days = if min_days >= max_days {
        min_days
    } else {
        rng.gen_range(min_days..=max_days)
    };

    let dt = base
        .checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(base);
    format_timestamp(dt)
}
