//! Normalized Validator Outputs

use chrono::{DateTime, Utc};

use crate::AlertLevel;

/// A validated record ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub station: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<String>,
    pub notes: Option<String>,
}

/// A validated update payload
///
/// Each field is a present/absent wrapper: `Some` means the payload
/// carried the field, `None` means it was omitted. What omission means
/// (preserve vs clear) is decided by the store operation, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub station: Option<String>,
    pub recorded_at: Option<DateTime<Utc>>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<String>,
    pub notes: Option<String>,
}

/// A validated alert ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub title: String,
    pub message: String,
    pub level: AlertLevel,
    pub active: bool,
}
