//! The renderable, day-scoped fragment of an entity.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::entity::Entity;

/// One entity's presence on one calendar day.
///
/// Renderers read `day`, the interval, the boundary flags, the relative lane
/// (`relative_start`, `relative_width`, both fractions of the day's width) and
/// `minutes_from_start_hour`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutUnit<T = ()> {
    /// The entity this unit was split from.
    pub entity: Arc<Entity<T>>,
    /// 0-based position among the entity's day parts.
    pub part_index: usize,
    /// Day bucket this unit belongs to.
    pub day: NaiveDate,
    /// Start of the interval, clipped to `day`.
    pub start: DateTime<Utc>,
    /// End of the interval, clipped to `day`.
    pub end: DateTime<Utc>,
    pub starts_on_earlier_day: bool,
    pub ends_on_later_day: bool,
    pub relative_start: f64,
    pub relative_width: f64,
    /// Minutes between the grid's start hour on `day` and `start`.
    /// `None` for all-day units.
    pub minutes_from_start_hour: Option<i64>,
}

impl<T> LayoutUnit<T> {
    pub fn is_all_day(&self) -> bool {
        self.entity.is_all_day()
    }

    /// Right edge of the unit's lane.
    pub fn relative_end(&self) -> f64 {
        self.relative_start + self.relative_width
    }
}
