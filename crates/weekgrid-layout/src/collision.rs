//! Detect overlapping units and partition them into collision groups.
//!
//! Timed units overlap when their half-open intervals intersect: a unit ending
//! exactly when another starts does NOT collide with it. All-day units collide
//! with every other all-day unit on the same day, and never with timed units.

use crate::unit::LayoutUnit;

/// Whether two units need separate horizontal space.
pub fn collides<T, U>(a: &LayoutUnit<T>, b: &LayoutUnit<U>) -> bool {
    match (a.is_all_day(), b.is_all_day()) {
        (true, true) => a.day == b.day,
        (false, false) => a.start < b.end && b.start < a.end,
        _ => false,
    }
}

/// Units whose intervals are connected through pairwise overlap.
///
/// Members are keys (indices) into the unit slice the group was built from,
/// kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionGroup {
    pub members: Vec<usize>,
}

impl CollisionGroup {
    fn singleton(key: usize) -> Self {
        Self { members: vec![key] }
    }

    /// Whether `key` overlaps any unit already in the group.
    pub fn collides_with<T>(&self, units: &[LayoutUnit<T>], key: usize) -> bool {
        self.members
            .iter()
            .any(|&member| collides(&units[member], &units[key]))
    }
}

/// Group the units at `keys` (already in sort order) into collision groups.
///
/// Each unit joins the first existing group it overlaps, or starts a new one.
/// With sorted input this matches the connected components of the overlap graph.
pub fn collision_groups<T>(units: &[LayoutUnit<T>], keys: &[usize]) -> Vec<CollisionGroup> {
    let mut groups: Vec<CollisionGroup> = Vec::new();

    for &key in keys {
        match groups
            .iter_mut()
            .find(|group| group.collides_with(units, key))
        {
            Some(group) => group.members.push(key),
            None => groups.push(CollisionGroup::singleton(key)),
        }
    }

    groups
}

/// One group per unit, used when all-day units are stacked vertically.
pub fn singleton_groups(keys: &[usize]) -> Vec<CollisionGroup> {
    keys.iter().copied().map(CollisionGroup::singleton).collect()
}
