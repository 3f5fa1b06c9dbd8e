//! Calendar-day arithmetic in the grid's time zone.
//!
//! Local times that fall in a DST gap are shifted forward to the first valid
//! instant after the gap. Ambiguous local times resolve to the earliest mapping.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Step used to walk out of a DST gap. Real-world gaps end on quarter hours.
const GAP_STEP_MINUTES: i64 = 15;

/// Give up after a full day of stepping; no zone has a gap that long.
const MAX_GAP_STEPS: i64 = 24 * 60 / GAP_STEP_MINUTES;

/// Calendar day of `instant` in `tz`.
pub fn day_of(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Resolve a local wall-clock time in `tz` to an instant.
pub fn resolve_local(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    for step in 0..=MAX_GAP_STEPS {
        let candidate = local + Duration::minutes(step * GAP_STEP_MINUTES);
        if let Some(resolved) = tz.from_local_datetime(&candidate).earliest() {
            return resolved.with_timezone(&Utc);
        }
    }
    local.and_utc()
}

/// Instant at which `day` reaches `hour:00` local time. Hours past 23 clamp to 23.
pub fn at_hour(day: NaiveDate, hour: u32, tz: Tz) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    resolve_local(day.and_time(time), tz)
}

/// Local midnight at the beginning of `day`.
pub fn start_of_day(day: NaiveDate, tz: Tz) -> DateTime<Utc> {
    at_hour(day, 0, tz)
}

/// Last representable millisecond of `day`.
pub fn end_of_day(day: NaiveDate, tz: Tz) -> DateTime<Utc> {
    match day.succ_opt() {
        Some(next) => start_of_day(next, tz) - Duration::milliseconds(1),
        None => DateTime::<Utc>::MAX_UTC,
    }
}
