//! Vertical placement of timed units.

use crate::calendar;
use crate::config::GridConfig;
use crate::unit::LayoutUnit;

/// Minutes from the grid's start hour on the unit's day to the unit's start.
///
/// Negative when the unit starts before the first displayable hour. All-day
/// units have no vertical position and yield `None`.
pub fn minutes_from_start_hour<T>(unit: &LayoutUnit<T>, config: &GridConfig) -> Option<i64> {
    if unit.is_all_day() {
        return None;
    }
    let grid_start = calendar::at_hour(unit.day, config.min_hour, config.timezone);
    Some((unit.start - grid_start).num_minutes())
}
