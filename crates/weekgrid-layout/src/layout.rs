//! The layout pass: sort, split, bucket by day, group, pack and expand.
//!
//! A pass is a pure function of its input. Running it twice on the same
//! entities yields identical units, and separate passes share no state, so
//! independent passes may run on different threads. A single pass stays
//! sequential because every column decision depends on all earlier ones.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::collision::{collision_groups, singleton_groups, CollisionGroup};
use crate::columns;
use crate::config::GridConfig;
use crate::entity::Entity;
use crate::error::Result;
use crate::expand;
use crate::position;
use crate::split;
use crate::unit::LayoutUnit;

/// Lay out `entities` on the grid described by `config`.
///
/// Returns one [`LayoutUnit`] per entity and day, in sort order (entity start,
/// then entity end) and then by part index.
///
/// # Errors
/// Returns `LayoutError::InvalidGrid` if `config` fails validation and
/// `LayoutError::InvalidInterval` for the first entity whose end is not after
/// its start. Nothing is laid out in either case.
pub fn layout<T>(
    entities: impl IntoIterator<Item = Entity<T>>,
    config: &GridConfig,
) -> Result<Vec<LayoutUnit<T>>> {
    config.validate()?;
    let entities: Vec<Entity<T>> = entities.into_iter().collect();
    for entity in &entities {
        entity.validate()?;
    }

    let sorted = sort_entities(entities);
    let mut units: Vec<LayoutUnit<T>> = sorted
        .iter()
        .flat_map(|entity| split::split(entity, config))
        .collect();

    let buckets = bucket_by_day(&units);
    let mut group_count = 0;

    for keys in buckets.values() {
        for group in day_groups(&units, keys, config) {
            let packing = columns::pack(&units, &group);
            for (key, lane) in expand::expand(&packing) {
                let unit = &mut units[key];
                unit.relative_start = lane.relative_start();
                unit.relative_width = lane.relative_width();
            }
            group_count += 1;
        }
    }

    for unit in &mut units {
        unit.minutes_from_start_hour = position::minutes_from_start_hour(unit, config);
    }

    debug!(
        "laid out {} entities as {} units over {} days in {} collision groups",
        sorted.len(),
        units.len(),
        buckets.len(),
        group_count
    );

    Ok(units)
}

/// Sort entities by `(start, end)`. The sort is stable, so ties keep input order.
pub fn sort_entities<T>(entities: Vec<Entity<T>>) -> Vec<Arc<Entity<T>>> {
    let mut sorted = entities;
    sorted.sort_by_key(|entity| (entity.start, entity.end));
    sorted.into_iter().map(Arc::new).collect()
}

/// Group unit keys by day, preserving unit order within each day.
pub fn bucket_by_day<T>(units: &[LayoutUnit<T>]) -> BTreeMap<NaiveDate, Vec<usize>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (key, unit) in units.iter().enumerate() {
        buckets.entry(unit.day).or_default().push(key);
    }
    buckets
}

/// Collision groups of one day: timed units first, then all-day units.
fn day_groups<T>(
    units: &[LayoutUnit<T>],
    keys: &[usize],
    config: &GridConfig,
) -> Vec<CollisionGroup> {
    let (all_day, timed): (Vec<usize>, Vec<usize>) =
        keys.iter().copied().partition(|&key| units[key].is_all_day());

    let mut groups = collision_groups(units, &timed);
    if config.arrange_all_day_vertically {
        groups.extend(singleton_groups(&all_day));
    } else {
        groups.extend(collision_groups(units, &all_day));
    }
    groups
}

/// Borrow a layout result grouped by day.
pub fn units_by_day<T>(units: &[LayoutUnit<T>]) -> BTreeMap<NaiveDate, Vec<&LayoutUnit<T>>> {
    let mut days: BTreeMap<NaiveDate, Vec<&LayoutUnit<T>>> = BTreeMap::new();
    for unit in units {
        days.entry(unit.day).or_default().push(unit);
    }
    days
}
