use chrono::{DateTime, Duration, Utc};
use mockable::Clock;

/// Five years including leap-day padding.
pub const CARD_VALIDITY_DAYS: i64 = 1826;

pub fn compute_expiration(clock: &dyn Clock) -> DateTime<Utc> {
    clock.utc() + Duration::days(CARD_VALIDITY_DAYS)
}
