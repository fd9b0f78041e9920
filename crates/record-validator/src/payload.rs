//! Raw Inbound Payloads
//!
//! Drafts are what the transport layer deserializes a request body into.
//! Every field is optional at this stage; unknown fields are dropped by
//! serde. Validation decides what presence/absence means per operation.

use serde::Deserialize;

/// A value that should be a number but may arrive as a numeric string
///
/// Coercion happens in the validator; a non-numeric string is a
/// validation failure, not a deserialization failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    /// Proper JSON number
    Number(f64),
    /// String that may parse as a number
    Text(String),
}

/// Raw weather-record payload for create and update requests
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordDraft {
    /// Observing site label
    pub station: Option<String>,
    /// Instant the observation pertains to (RFC 3339 or YYYY-MM-DD)
    pub recorded_at: Option<String>,
    pub temperature: Option<NumberLike>,
    pub humidity: Option<NumberLike>,
    pub pressure: Option<NumberLike>,
    pub wind_speed: Option<NumberLike>,
    /// Short compass code, e.g. "NW"
    pub wind_direction: Option<String>,
    pub notes: Option<String>,
}

/// Raw alert payload for create requests
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertDraft {
    pub title: Option<String>,
    pub message: Option<String>,
    /// One of "info", "warning", "critical"; anything else coerces to warning
    pub level: Option<String>,
    pub active: Option<bool>,
}
