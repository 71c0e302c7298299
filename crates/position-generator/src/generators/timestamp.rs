//! Date value generators.

use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Days per year used when converting year spans into day offsets.
pub const DAYS_PER_YEAR: i64 = 365;

/// Generate a date between `max_days` days before `today` and `today` (inclusive).
pub fn date_in_past<R: Rng>(rng: &mut R, today: NaiveDate, max_days: i64) -> NaiveDate {
    let offset = rng.gen_range(0..=max_days.max(0));
    today
        .checked_sub_signed(Duration::days(offset))
        .unwrap_or(today)
}

/// Generate a date between `min_days` and `max_days` days after `today` (inclusive).
pub fn date_in_future<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    min_days: i64,
    max_days: i64,
) -> NaiveDate {
    let min_days = min_days.max(0);
    let offset = rng.gen_range(min_days..=max_days.max(min_days));
    today
        .checked_add_signed(Duration::days(offset))
        .unwrap_or(today)
}
