//! Turn column membership into fractional lanes.
//!
//! Every column gets the same width, `1 / column_count`. A unit occupying a
//! contiguous run of columns starts at the first one and is as wide as the run,
//! so a unit with free space beside it expands to fill that space.

use std::collections::BTreeMap;

use crate::columns::ColumnPacking;

/// A unit's horizontal placement, kept as exact column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    pub first_column: usize,
    pub span: usize,
    pub column_count: usize,
}

impl Lane {
    pub fn relative_start(&self) -> f64 {
        self.first_column as f64 / self.column_count as f64
    }

    pub fn relative_width(&self) -> f64 {
        self.span as f64 / self.column_count as f64
    }
}

/// Compute the lane of every unit in a packing, keyed by unit key.
pub fn expand(packing: &ColumnPacking) -> BTreeMap<usize, Lane> {
    let column_count = packing.column_count();

    packing
        .membership()
        .into_iter()
        .filter_map(|(key, columns)| {
            let first_column = *columns.first()?;
            Some((
                key,
                Lane {
                    first_column,
                    span: columns.len(),
                    column_count,
                },
            ))
        })
        .collect()
}
