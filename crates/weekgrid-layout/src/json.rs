//! JSON boundary used by the CLI and the WASM bindings.
//!
//! Entities come in as an array of objects with ISO 8601 `start`/`end` strings;
//! laid-out units go out as an array of flat objects with RFC 3339 instants.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::GridConfig;
use crate::entity::{Entity, EntityKind};
use crate::error::{LayoutError, Result};
use crate::layout::layout;
use crate::stats::{day_stats, DayStats};
use crate::unit::LayoutUnit;

/// Entity as accepted on the JSON boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityInput {
    pub id: i64,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub data: Value,
}

impl EntityInput {
    /// Parse the datetimes and build an [`Entity`].
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidDateTime` if `start` or `end` is not ISO 8601.
    pub fn into_entity(self) -> Result<Entity<Value>> {
        Ok(Entity {
            id: self.id,
            kind: self.kind,
            title: self.title,
            subtitle: self.subtitle,
            start: parse_datetime(&self.start)?,
            end: parse_datetime(&self.end)?,
            all_day: self.all_day && self.kind == EntityKind::Event,
            data: self.data,
        })
    }
}

/// A laid-out unit as emitted on the JSON boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitOutput {
    pub entity_id: i64,
    pub kind: EntityKind,
    pub title: String,
    pub part_index: usize,
    pub day: NaiveDate,
    pub start: String,
    pub end: String,
    pub all_day: bool,
    pub starts_on_earlier_day: bool,
    pub ends_on_later_day: bool,
    pub relative_start: f64,
    pub relative_width: f64,
    pub minutes_from_start_hour: Option<i64>,
    pub data: Value,
}

impl From<&LayoutUnit<Value>> for UnitOutput {
    fn from(unit: &LayoutUnit<Value>) -> Self {
        Self {
            entity_id: unit.entity.id,
            kind: unit.entity.kind,
            title: unit.entity.title.clone(),
            part_index: unit.part_index,
            day: unit.day,
            start: unit.start.to_rfc3339(),
            end: unit.end.to_rfc3339(),
            all_day: unit.is_all_day(),
            starts_on_earlier_day: unit.starts_on_earlier_day,
            ends_on_later_day: unit.ends_on_later_day,
            relative_start: unit.relative_start,
            relative_width: unit.relative_width,
            minutes_from_start_hour: unit.minutes_from_start_hour,
            data: unit.entity.data.clone(),
        }
    }
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (with offset, e.g. "2026-03-02T14:00:00+01:00") and naive
/// local time (e.g. "2026-03-02T14:00:00"), which is interpreted as UTC.
///
/// # Errors
/// Returns `LayoutError::InvalidDateTime` if neither form matches.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| LayoutError::InvalidDateTime {
            input: s.to_string(),
            message: e.to_string(),
        })
}

/// Parse a JSON array of entity objects.
///
/// # Errors
/// Returns `LayoutError::Json` for malformed JSON and
/// `LayoutError::InvalidDateTime` for unparseable instants.
pub fn parse_entities(json: &str) -> Result<Vec<Entity<Value>>> {
    let inputs: Vec<EntityInput> = serde_json::from_str(json)?;
    inputs.into_iter().map(EntityInput::into_entity).collect()
}

/// Parse a JSON grid configuration object. Missing fields take their defaults.
///
/// # Errors
/// Returns `LayoutError::Json` for malformed JSON and `LayoutError::InvalidGrid`
/// if the configuration fails validation.
pub fn parse_config(json: &str) -> Result<GridConfig> {
    let config: GridConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Convert laid-out units into their JSON boundary form.
pub fn to_outputs(units: &[LayoutUnit<Value>]) -> Vec<UnitOutput> {
    units.iter().map(UnitOutput::from).collect()
}

/// Lay out a JSON array of entities and return a JSON array of units.
///
/// `config_json` defaults to [`GridConfig::default`] when `None`.
///
/// # Errors
/// Any parse, validation or layout error from the steps above.
pub fn layout_json(entities_json: &str, config_json: Option<&str>) -> Result<String> {
    let config = match config_json {
        Some(json) => parse_config(json)?,
        None => GridConfig::default(),
    };
    let units = layout(parse_entities(entities_json)?, &config)?;
    Ok(serde_json::to_string(&to_outputs(&units))?)
}

/// Lay out a JSON array of entities and return per-day statistics as JSON.
///
/// # Errors
/// Same as [`layout_json`].
pub fn stats_json(entities_json: &str, config_json: Option<&str>) -> Result<String> {
    let config = match config_json {
        Some(json) => parse_config(json)?,
        None => GridConfig::default(),
    };
    let units = layout(parse_entities(entities_json)?, &config)?;
    let stats: Vec<DayStats> = day_stats(&units);
    Ok(serde_json::to_string(&stats)?)
}
