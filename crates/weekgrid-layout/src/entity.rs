//! Source records laid out on the grid.
//!
//! An [`Entity`] is either a regular event or a block of unavailable time. The
//! engine only reads its interval and all-day flag; everything else is carried
//! through untouched so renderers can reach it from each [`LayoutUnit`].
//!
//! [`LayoutUnit`]: crate::unit::LayoutUnit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// What an entity represents on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A regular calendar event. May be all-day.
    #[default]
    Event,
    /// Time the user is unavailable. Always timed, never all-day.
    BlockedTime,
}

/// A time-interval record to be laid out.
///
/// `start < end` must hold; [`Entity::validate`] checks it and
/// [`layout`](crate::layout::layout) rejects entities that fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<T = ()> {
    pub id: i64,
    pub kind: EntityKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
    /// Caller payload, never inspected by the engine.
    pub data: T,
}

impl<T> Entity<T> {
    /// Create a timed event.
    pub fn event(
        id: i64,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        data: T,
    ) -> Self {
        Self {
            id,
            kind: EntityKind::Event,
            title: title.into(),
            subtitle: None,
            start,
            end,
            all_day: false,
            data,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Mark the entity as all-day. Ignored for blocked time.
    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day && self.kind == EntityKind::Event;
        self
    }

    pub fn is_all_day(&self) -> bool {
        self.all_day && self.kind == EntityKind::Event
    }

    /// Check that the entity has a positive duration.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidInterval` when `end <= start`.
    pub fn validate(&self) -> Result<()> {
        if self.end <= self.start {
            return Err(LayoutError::InvalidInterval {
                id: self.id,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl Entity<()> {
    /// Create a blocked-time entity.
    pub fn blocked_time(
        id: i64,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: EntityKind::BlockedTime,
            ..Self::event(id, title, start, end, ())
        }
    }
}
