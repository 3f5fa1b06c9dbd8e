//! Error types for weekgrid-layout operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    /// An entity whose end does not come strictly after its start.
    #[error("Invalid interval for entity {id}: end {end} is not after start {start}")]
    InvalidInterval {
        id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid grid configuration: {0}")]
    InvalidGrid(String),

    #[error("Invalid datetime '{input}': {message}")]
    InvalidDateTime { input: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
