//! Property-based tests for the layout pass using proptest.
//!
//! These verify invariants that must hold for *any* set of valid entities,
//! not just the hand-built scenarios in the other test files.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use proptest::prelude::*;
use weekgrid_layout::collision::collision_groups;
use weekgrid_layout::layout::bucket_by_day;
use weekgrid_layout::{collides, layout, Entity, GridConfig, LayoutUnit};

const EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Strategies — generate valid entities around one week on an arbitrary grid
// ---------------------------------------------------------------------------

/// Either an ordinary March week, or the days around 2018-11-04 when
/// São Paulo skipped from 00:00 straight to 01:00.
fn arb_base() -> impl Strategy<Value = DateTime<Utc>> {
    prop_oneof![
        Just(Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()),
        Just(Utc.with_ymd_and_hms(2018, 11, 2, 0, 0, 0).unwrap()),
    ]
}

fn arb_timezone() -> impl Strategy<Value = Tz> {
    prop_oneof![
        Just(Tz::UTC),
        Just(Tz::Asia__Tokyo),
        Just(Tz::America__Sao_Paulo),
    ]
}

fn arb_grid() -> impl Strategy<Value = GridConfig> {
    (0u32..=23, arb_timezone()).prop_map(|(min_hour, timezone)| {
        GridConfig::default()
            .with_hours(min_hour, 24)
            .with_timezone(timezone)
    })
}

/// An entity starting on a quarter hour within three days, lasting 15 minutes
/// to 36 hours. Roughly 15% are all-day.
fn arb_entity() -> impl Strategy<Value = (i64, i64, bool)> {
    (0i64..(3 * 24 * 4), 1i64..=(36 * 4), prop::bool::weighted(0.15))
}

fn arb_entities() -> impl Strategy<Value = Vec<Entity>> {
    (arb_base(), prop::collection::vec(arb_entity(), 0..=16)).prop_map(|(base, specs)| {
        specs
            .into_iter()
            .enumerate()
            .map(|(id, (start_q, len_q, all_day))| {
                let start = base + Duration::minutes(15 * start_q);
                let end = start + Duration::minutes(15 * len_q);
                Entity::event(id as i64, format!("e{id}"), start, end, ()).with_all_day(all_day)
            })
            .collect()
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Recompute collision groups over a finished layout, per day and partition.
fn groups_of(units: &[LayoutUnit]) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    for keys in bucket_by_day(units).values() {
        let (all_day, timed): (Vec<usize>, Vec<usize>) =
            keys.iter().copied().partition(|&k| units[k].is_all_day());
        for partition in [timed, all_day] {
            for group in collision_groups(units, &partition) {
                groups.push(group.members);
            }
        }
    }
    groups
}

fn local_day(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

fn lanes_disjoint(a: &LayoutUnit, b: &LayoutUnit) -> bool {
    a.relative_end() <= b.relative_start + EPSILON || b.relative_end() <= a.relative_start + EPSILON
}

// ---------------------------------------------------------------------------
// Property 1: Overlapping units never share horizontal space
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlapping_units_have_disjoint_lanes(grid in arb_grid(), entities in arb_entities()) {
        let units = layout(entities, &grid).unwrap();

        for (i, a) in units.iter().enumerate() {
            for b in units.iter().skip(i + 1) {
                if a.day == b.day && collides(a, b) {
                    prop_assert!(
                        lanes_disjoint(a, b),
                        "lanes overlap: {}#{} [{}, {}) vs {}#{} [{}, {})",
                        a.entity.id, a.part_index, a.relative_start, a.relative_end(),
                        b.entity.id, b.part_index, b.relative_start, b.relative_end()
                    );
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Every collision group uses the full width
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn every_group_reaches_the_right_edge(grid in arb_grid(), entities in arb_entities()) {
        let units = layout(entities, &grid).unwrap();

        for group in groups_of(&units) {
            let right = group
                .iter()
                .map(|&k| units[k].relative_end())
                .fold(0.0_f64, f64::max);
            prop_assert!((right - 1.0).abs() < EPSILON, "group {:?} ends at {}", group, right);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Widths are whole multiples of the group's column width
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn widths_are_multiples_of_the_column_width(grid in arb_grid(), entities in arb_entities()) {
        let units = layout(entities, &grid).unwrap();

        for group in groups_of(&units) {
            let narrowest = group
                .iter()
                .map(|&k| units[k].relative_width)
                .fold(f64::INFINITY, f64::min);
            let columns = (1.0 / narrowest).round();

            for &k in &group {
                let in_columns = units[k].relative_width * columns;
                prop_assert!((in_columns - in_columns.round()).abs() < EPSILON);
                prop_assert!(units[k].relative_width > 0.0);
                prop_assert!(units[k].relative_end() <= 1.0 + EPSILON);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Each entity yields one unit per day it touches
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn entities_split_into_one_unit_per_day(grid in arb_grid(), entities in arb_entities()) {
        let units = layout(entities.clone(), &grid).unwrap();

        for entity in &entities {
            let parts: Vec<&LayoutUnit> =
                units.iter().filter(|u| u.entity.id == entity.id).collect();

            let expected = if entity.is_all_day() {
                1
            } else {
                // [start, end) touches every day up to the one holding its last instant.
                let first = local_day(entity.start, grid.timezone);
                let last = local_day(entity.end - Duration::nanoseconds(1), grid.timezone);
                (last - first).num_days() as usize + 1
            };
            prop_assert_eq!(parts.len(), expected);

            let last_index = parts.len() - 1;
            for (index, part) in parts.iter().enumerate() {
                prop_assert_eq!(part.part_index, index);
                prop_assert_eq!(part.starts_on_earlier_day, index > 0);
                prop_assert_eq!(part.ends_on_later_day, index < last_index);
            }

            let days: HashSet<_> = parts.iter().map(|p| p.day).collect();
            prop_assert_eq!(days.len(), parts.len());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Layout is deterministic
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn layout_is_deterministic(
        grid in arb_grid(),
        entities in arb_entities(),
        stack in any::<bool>(),
    ) {
        let config = grid.with_all_day_stacking(stack);
        let first = layout(entities.clone(), &config).unwrap();
        let second = layout(entities, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Units stay inside their day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn timed_units_stay_inside_their_day(grid in arb_grid(), entities in arb_entities()) {
        let units = layout(entities, &grid).unwrap();

        for unit in units.iter().filter(|u| !u.is_all_day()) {
            prop_assert_eq!(local_day(unit.start, grid.timezone), unit.day);
            prop_assert_eq!(local_day(unit.end, grid.timezone), unit.day);
            prop_assert!(
                unit.start < unit.end,
                "empty part {}#{} on {}: [{}, {})",
                unit.entity.id, unit.part_index, unit.day, unit.start, unit.end
            );
            // Minutes run from the grid start hour, so earlier parts go negative.
            // A DST day may be an hour shorter or longer.
            let minutes = unit.minutes_from_start_hour.unwrap();
            let min_offset = i64::from(grid.min_hour) * 60;
            prop_assert!((-min_offset - 60..25 * 60 - min_offset).contains(&minutes));
        }
    }
}
