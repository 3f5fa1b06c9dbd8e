//! Per-day summary of a layout result.

use chrono::NaiveDate;
use serde::Serialize;

use crate::layout::units_by_day;
use crate::unit::LayoutUnit;

/// How crowded one day of the grid is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub day: NaiveDate,
    pub units: usize,
    pub timed_units: usize,
    pub all_day_units: usize,
    /// Largest column count among the day's timed collision groups.
    pub max_timed_columns: usize,
    /// Largest column count among the day's all-day collision groups.
    pub max_all_day_columns: usize,
}

/// Summarize a layout result, one entry per day in ascending order.
///
/// Every collision group contains a unit exactly one column wide (the unit
/// that opened its last column), so the narrowest lane gives the column count.
pub fn day_stats<T>(units: &[LayoutUnit<T>]) -> Vec<DayStats> {
    units_by_day(units)
        .into_iter()
        .map(|(day, day_units)| {
            let (all_day, timed): (Vec<&LayoutUnit<T>>, Vec<&LayoutUnit<T>>) =
                day_units.iter().copied().partition(|unit| unit.is_all_day());
            DayStats {
                day,
                units: day_units.len(),
                timed_units: timed.len(),
                all_day_units: all_day.len(),
                max_timed_columns: max_columns(&timed),
                max_all_day_columns: max_columns(&all_day),
            }
        })
        .collect()
}

fn max_columns<T>(units: &[&LayoutUnit<T>]) -> usize {
    units
        .iter()
        .filter(|unit| unit.relative_width > 0.0)
        .map(|unit| (1.0 / unit.relative_width).round() as usize)
        .max()
        .unwrap_or(0)
}
