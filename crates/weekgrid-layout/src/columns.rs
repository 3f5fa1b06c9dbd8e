//! Greedy column packing for one collision group.
//!
//! Units are visited in sort order. Each unit goes into the columns whose last
//! unit it does not overlap:
//!
//! - no fitting column: open a new column for it;
//! - one fitting column: append it there;
//! - several fitting columns with contiguous indices: append it to all of them,
//!   so it later spans the whole run;
//! - several fitting columns with a gap between them: append it to the leftmost
//!   only, so a unit never jumps over a lane it does not occupy.
//!
//! The result is not guaranteed to use the minimum number of columns.

use std::collections::BTreeMap;

use log::trace;

use crate::collision::{collides, CollisionGroup};
use crate::unit::LayoutUnit;

/// A vertical lane within a collision group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub index: usize,
    /// Unit keys in the order they were appended.
    pub members: Vec<usize>,
}

impl Column {
    fn new(index: usize) -> Self {
        Self {
            index,
            members: Vec::new(),
        }
    }

    /// A column fits a unit when it is empty or its last unit does not overlap it.
    pub fn fits<T>(&self, units: &[LayoutUnit<T>], key: usize) -> bool {
        match self.members.last() {
            None => true,
            Some(&last) => !collides(&units[last], &units[key]),
        }
    }
}

/// Column membership computed for one collision group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPacking {
    pub columns: Vec<Column>,
}

impl ColumnPacking {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Length of the longest column.
    pub fn rows(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.members.len())
            .max()
            .unwrap_or(0)
    }

    /// Column indices occupied by each unit key, ascending.
    pub fn membership(&self) -> BTreeMap<usize, Vec<usize>> {
        let mut membership: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for column in &self.columns {
            for &key in &column.members {
                membership.entry(key).or_default().push(column.index);
            }
        }
        membership
    }
}

/// Pack the members of `group` into columns.
pub fn pack<T>(units: &[LayoutUnit<T>], group: &CollisionGroup) -> ColumnPacking {
    let mut columns = vec![Column::new(0)];

    for &key in &group.members {
        let fitting: Vec<usize> = columns
            .iter()
            .filter(|column| column.fits(units, key))
            .map(|column| column.index)
            .collect();

        match fitting.as_slice() {
            [] => {
                let index = columns.len();
                trace!("unit {key}: no fitting column, opening column {index}");
                let mut column = Column::new(index);
                column.members.push(key);
                columns.push(column);
            }
            [only] => {
                trace!("unit {key}: appended to column {only}");
                columns[*only].members.push(key);
            }
            [leftmost, ..] if !is_contiguous(&fitting) => {
                trace!("unit {key}: non-contiguous fit {fitting:?}, using column {leftmost}");
                columns[*leftmost].members.push(key);
            }
            _ => {
                trace!("unit {key}: spanning columns {fitting:?}");
                for &index in &fitting {
                    columns[index].members.push(key);
                }
            }
        }
    }

    ColumnPacking { columns }
}

/// Whether sorted indices form a run without gaps.
fn is_contiguous(indices: &[usize]) -> bool {
    indices.windows(2).all(|pair| pair[0] + 1 == pair[1])
}
