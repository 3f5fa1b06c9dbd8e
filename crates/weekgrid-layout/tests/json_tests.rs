//! Tests for the JSON boundary.

use serde_json::{json, Value};
use weekgrid_layout::json::{parse_config, parse_entities, stats_json};
use weekgrid_layout::{layout_json, parse_datetime, EntityKind, LayoutError};

fn units_of(output: &str) -> Vec<Value> {
    serde_json::from_str::<Vec<Value>>(output).expect("layout output must be a JSON array")
}

// ── parse_datetime ──────────────────────────────────────────────────────────

#[test]
fn rfc3339_with_offset_is_converted_to_utc() {
    let dt = parse_datetime("2026-03-02T14:00:00+01:00").unwrap();
    assert_eq!(dt.to_rfc3339(), "2026-03-02T13:00:00+00:00");
}

#[test]
fn naive_datetime_is_read_as_utc() {
    let dt = parse_datetime("2026-03-02T14:00:00").unwrap();
    assert_eq!(dt.to_rfc3339(), "2026-03-02T14:00:00+00:00");
}

#[test]
fn garbage_datetime_is_rejected() {
    let err = parse_datetime("next tuesday").unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDateTime { .. }));
    assert!(err.to_string().contains("next tuesday"));
}

// ── parse_entities / parse_config ───────────────────────────────────────────

#[test]
fn entity_defaults_are_applied() {
    let entities = parse_entities(
        r#"[{"id": 1, "start": "2026-03-02T09:00:00Z", "end": "2026-03-02T10:00:00Z"}]"#,
    )
    .unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].kind, EntityKind::Event);
    assert_eq!(entities[0].title, "");
    assert!(!entities[0].all_day);
    assert_eq!(entities[0].data, Value::Null);
}

#[test]
fn blocked_time_cannot_be_all_day() {
    let entities = parse_entities(
        r#"[{"id": 1, "kind": "blocked_time", "all_day": true,
             "start": "2026-03-02T09:00:00Z", "end": "2026-03-02T10:00:00Z"}]"#,
    )
    .unwrap();
    assert_eq!(entities[0].kind, EntityKind::BlockedTime);
    assert!(!entities[0].is_all_day());
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = parse_entities("[{").unwrap_err();
    assert!(matches!(err, LayoutError::Json(_)));
}

#[test]
fn partial_config_takes_defaults() {
    let config = parse_config(r#"{"min_hour": 7, "timezone": "Europe/Berlin"}"#).unwrap();
    assert_eq!(config.min_hour, 7);
    assert_eq!(config.max_hour, 24);
    assert!(!config.arrange_all_day_vertically);
    assert_eq!(config.timezone, chrono_tz::Tz::Europe__Berlin);
}

#[test]
fn invalid_config_is_rejected() {
    let err = parse_config(r#"{"max_hour": 30}"#).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidGrid(_)));
}

// ── layout_json ─────────────────────────────────────────────────────────────

#[test]
fn layout_json_emits_flat_units() {
    let input = json!([
        {"id": 1, "title": "A", "start": "2026-03-02T10:00:00Z", "end": "2026-03-02T11:00:00Z",
         "data": {"color": "red"}},
        {"id": 2, "title": "B", "start": "2026-03-02T09:00:00Z", "end": "2026-03-02T12:00:00Z"}
    ])
    .to_string();

    let units = units_of(&layout_json(&input, None).unwrap());
    assert_eq!(units.len(), 2);

    assert_eq!(units[0]["entity_id"], 2);
    assert_eq!(units[0]["relative_start"], 0.0);
    assert_eq!(units[0]["relative_width"], 0.5);
    assert_eq!(units[0]["day"], "2026-03-02");
    assert_eq!(units[0]["minutes_from_start_hour"], 540);

    assert_eq!(units[1]["entity_id"], 1);
    assert_eq!(units[1]["title"], "A");
    assert_eq!(units[1]["relative_start"], 0.5);
    assert_eq!(units[1]["start"], "2026-03-02T10:00:00+00:00");
    assert_eq!(units[1]["data"]["color"], "red");
    assert_eq!(units[1]["kind"], "event");
}

#[test]
fn layout_json_applies_the_config() {
    let input = r#"[{"id": 1, "start": "2026-03-02T09:00:00Z", "end": "2026-03-02T10:00:00Z"}]"#;
    let units = units_of(&layout_json(input, Some(r#"{"min_hour": 8}"#)).unwrap());
    assert_eq!(units[0]["minutes_from_start_hour"], 60);
}

#[test]
fn layout_json_reports_invalid_intervals() {
    let input = r#"[{"id": 9, "start": "2026-03-02T10:00:00Z", "end": "2026-03-02T10:00:00Z"}]"#;
    let err = layout_json(input, None).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidInterval { id: 9, .. }));
}

#[test]
fn all_day_units_have_null_minutes() {
    let input = r#"[{"id": 1, "all_day": true,
                     "start": "2026-03-02T00:00:00Z", "end": "2026-03-03T00:00:00Z"}]"#;
    let units = units_of(&layout_json(input, None).unwrap());
    assert_eq!(units[0]["all_day"], true);
    assert_eq!(units[0]["minutes_from_start_hour"], Value::Null);
}

#[test]
fn stats_json_lists_each_day() {
    let input = r#"[
        {"id": 1, "start": "2026-03-02T09:00:00Z", "end": "2026-03-02T10:00:00Z"},
        {"id": 2, "start": "2026-03-02T09:30:00Z", "end": "2026-03-03T01:00:00Z"}
    ]"#;
    let stats: Vec<Value> = serde_json::from_str(&stats_json(input, None).unwrap()).unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["day"], "2026-03-02");
    assert_eq!(stats[0]["max_timed_columns"], 2);
    assert_eq!(stats[1]["day"], "2026-03-03");
    assert_eq!(stats[1]["units"], 1);
}
