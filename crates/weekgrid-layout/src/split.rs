//! Sanitizing entity ends and splitting entities into per-day units.
//!
//! An entity from Monday 14:00 to Wednesday 01:00 becomes three units:
//! Monday 14:00 to end of Monday, all of Tuesday, and Wednesday 00:00 to 01:00.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::calendar;
use crate::config::GridConfig;
use crate::entity::Entity;
use crate::unit::LayoutUnit;

/// Pull an end instant that sits exactly on the grid's start-of-day cutoff back
/// by one millisecond, so it stays on the day it logically belongs to.
pub fn sanitize_end(end: DateTime<Utc>, config: &GridConfig) -> DateTime<Utc> {
    let tz = config.timezone;
    let cutoff = calendar::at_hour(calendar::day_of(end, tz), config.min_hour, tz);
    if end == cutoff {
        end - Duration::milliseconds(1)
    } else {
        end
    }
}

/// Sanitize the entity's end, then split it into one unit per calendar day it touches.
///
/// The end is exclusive: an entity ending exactly at a local midnight does not
/// touch the day that midnight opens, whatever the grid start hour is.
/// All-day entities always produce a single unit on the day of their start.
/// Units come back with a full-width lane; the layout pass narrows them.
pub fn split<T>(entity: &Arc<Entity<T>>, config: &GridConfig) -> Vec<LayoutUnit<T>> {
    let tz = config.timezone;
    // The sanitized end may not precede the start.
    let end = sanitize_end(entity.end, config).max(entity.start);
    let first_day = calendar::day_of(entity.start, tz);

    if entity.is_all_day() {
        return vec![new_unit(entity, 0, first_day, entity.start, end, false, false)];
    }

    let (last_day, end) = last_day_and_end(first_day, end, config);
    let days: Vec<_> = first_day.iter_days().take_while(|day| *day <= last_day).collect();
    let last_index = days.len() - 1;

    days.into_iter()
        .enumerate()
        .map(|(index, day)| {
            let unit_start = if index == 0 {
                entity.start
            } else {
                calendar::start_of_day(day, tz)
            };
            let unit_end = if index == last_index {
                end
            } else {
                calendar::end_of_day(day, tz)
            };
            new_unit(
                entity,
                index,
                day,
                unit_start,
                unit_end,
                index > 0,
                index < last_index,
            )
        })
        .collect()
}

/// The day holding the last instant of the entity, and the end clipped to it.
fn last_day_and_end(
    first_day: NaiveDate,
    end: DateTime<Utc>,
    config: &GridConfig,
) -> (NaiveDate, DateTime<Utc>) {
    let tz = config.timezone;
    let end_day = calendar::day_of(end, tz);
    if end_day > first_day && end == calendar::start_of_day(end_day, tz) {
        if let Some(previous) = end_day.pred_opt() {
            return (previous, calendar::end_of_day(previous, tz));
        }
    }
    (end_day.max(first_day), end)
}

fn new_unit<T>(
    entity: &Arc<Entity<T>>,
    part_index: usize,
    day: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    starts_on_earlier_day: bool,
    ends_on_later_day: bool,
) -> LayoutUnit<T> {
    LayoutUnit {
        entity: Arc::clone(entity),
        part_index,
        day,
        start,
        end,
        starts_on_earlier_day,
        ends_on_later_day,
        relative_start: 0.0,
        relative_width: 1.0,
        minutes_from_start_hour: None,
    }
}
