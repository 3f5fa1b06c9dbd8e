//! # weekgrid-layout
//!
//! Deterministic, collision-free horizontal layout for day/week calendar grids.
//!
//! Given events with a start, an end and an all-day flag, the engine splits
//! multi-day events into one unit per day, finds which units overlap in time,
//! and assigns each unit a lane (`relative_start`, `relative_width`, both in
//! `[0, 1]`) within its day. Overlapping units never share horizontal space;
//! units with free space beside them expand to fill it.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use weekgrid_layout::{layout, Entity, GridConfig};
//!
//! let at = |h| Utc.with_ymd_and_hms(2026, 3, 2, h, 0, 0).unwrap();
//! let entities = vec![
//!     Entity::event(1, "Standup", at(9), at(10), ()),
//!     Entity::event(2, "Review", at(9), at(11), ()),
//! ];
//!
//! let units = layout(entities, &GridConfig::default()).unwrap();
//! assert_eq!(units.len(), 2);
//! assert_eq!(units[0].relative_width, 0.5);
//! assert_eq!(units[1].relative_start, 0.5);
//! ```
//!
//! ## Modules
//!
//! - [`layout`] — the layout pass (entry point, sorting, day bucketing)
//! - [`split`] — end sanitizing and per-day splitting
//! - [`collision`] — overlap detection and collision groups
//! - [`columns`] — greedy column packing
//! - [`expand`] — column membership → fractional lanes
//! - [`position`] — vertical offset from the grid's start hour
//! - [`calendar`] — day boundaries in the grid's time zone
//! - [`stats`] — per-day summaries
//! - [`json`] — JSON boundary for the CLI and WASM bindings
//! - [`error`] — Error types

pub mod calendar;
pub mod collision;
pub mod columns;
pub mod config;
pub mod entity;
pub mod error;
pub mod expand;
pub mod json;
pub mod layout;
pub mod position;
pub mod split;
pub mod stats;
pub mod unit;

pub use collision::collides;
pub use config::GridConfig;
pub use entity::{Entity, EntityKind};
pub use error::LayoutError;
pub use json::{layout_json, parse_datetime};
pub use layout::{layout, units_by_day};
pub use unit::LayoutUnit;
