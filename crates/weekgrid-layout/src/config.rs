//! Grid configuration passed explicitly into every layout pass.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Describes the day/hour grid the layout is computed for.
///
/// Every field has a default, so a partial JSON object such as
/// `{"min_hour": 6}` deserializes into a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First displayable hour. Also the start-of-day cutoff for end sanitizing
    /// and the reference hour for `minutes_from_start_hour`.
    pub min_hour: u32,
    /// Hour after the last displayable one (24 = until midnight).
    ///
    /// Validated and serialized for renderers only. The layout pass never reads
    /// it: units after `max_hour` are still laid out and are not clipped.
    pub max_hour: u32,
    /// Give each all-day unit its own full-width row instead of sharing lanes.
    pub arrange_all_day_vertically: bool,
    /// Time zone in which calendar days are evaluated.
    pub timezone: Tz,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_hour: 0,
            max_hour: 24,
            arrange_all_day_vertically: false,
            timezone: Tz::UTC,
        }
    }
}

impl GridConfig {
    pub fn with_hours(mut self, min_hour: u32, max_hour: u32) -> Self {
        self.min_hour = min_hour;
        self.max_hour = max_hour;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_all_day_stacking(mut self, vertical: bool) -> Self {
        self.arrange_all_day_vertically = vertical;
        self
    }

    /// Check that the hours address a real time of day.
    ///
    /// A zero-width grid (`min_hour >= max_hour`) is accepted.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidGrid` if `min_hour > 23` or `max_hour > 24`.
    pub fn validate(&self) -> Result<()> {
        if self.min_hour > 23 {
            return Err(LayoutError::InvalidGrid(format!(
                "min_hour must be in 0..=23, got {}",
                self.min_hour
            )));
        }
        if self.max_hour > 24 {
            return Err(LayoutError::InvalidGrid(format!(
                "max_hour must be in 0..=24, got {}",
                self.max_hour
            )));
        }
        Ok(())
    }
}
