//! Persisted Document Models

use chrono::{DateTime, Utc};
use record_validator::AlertLevel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored weather observation
///
/// Measurements are optional; absence is valid and distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Store-assigned at insert, immutable thereafter
    pub id: Uuid,
    pub station: Option<String>,
    /// Instant the observation pertains to, not the insertion time
    pub recorded_at: DateTime<Utc>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One stored operational notice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub level: AlertLevel,
    pub active: bool,
    /// Set at insert, never modified
    pub created_at: DateTime<Utc>,
}
