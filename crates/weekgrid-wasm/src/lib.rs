//! WASM bindings for weekgrid-layout.
//!
//! Exposes the layout pass and per-day statistics to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p weekgrid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/weekgrid-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/weekgrid_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;
use weekgrid_layout::LayoutError;

fn to_js(e: LayoutError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Treat an empty or whitespace-only config string as "use the defaults".
fn config_arg(config_json: Option<String>) -> Option<String> {
    config_json.filter(|json| !json.trim().is_empty())
}

/// Lay out calendar events on a day/week grid.
///
/// `entities_json` must be a JSON array of `{id, start, end, ...}` objects with
/// ISO 8601 datetime strings. `config_json` is an optional grid configuration
/// object (`min_hour`, `max_hour`, `arrange_all_day_vertically`, `timezone`).
/// Returns a JSON string containing an array of positioned units.
#[wasm_bindgen(js_name = "layoutEvents")]
pub fn layout_events(entities_json: &str, config_json: Option<String>) -> Result<String, JsValue> {
    let config = config_arg(config_json);
    weekgrid_layout::layout_json(entities_json, config.as_deref()).map_err(to_js)
}

/// Lay out calendar events and summarize each day.
///
/// Takes the same arguments as [`layout_events`]. Returns a JSON string
/// containing an array of `{day, units, timed_units, all_day_units,
/// max_timed_columns, max_all_day_columns}` objects.
#[wasm_bindgen(js_name = "dayStats")]
pub fn day_stats(entities_json: &str, config_json: Option<String>) -> Result<String, JsValue> {
    let config = config_arg(config_json);
    weekgrid_layout::json::stats_json(entities_json, config.as_deref()).map_err(to_js)
}

/// Check a JSON array of entities without laying it out.
///
/// Returns the number of valid entities, or an error naming the first
/// malformed one.
#[wasm_bindgen(js_name = "validateEvents")]
pub fn validate_events(entities_json: &str) -> Result<u32, JsValue> {
    let entities = weekgrid_layout::json::parse_entities(entities_json).map_err(to_js)?;
    for entity in &entities {
        entity.validate().map_err(to_js)?;
    }
    Ok(entities.len() as u32)
}
