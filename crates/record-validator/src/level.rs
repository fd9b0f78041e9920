//! Alert Severity Levels

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Severity of an alert; always one of these three in persisted state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    #[default]
    Warning,
    Critical,
}

impl AlertLevel {
    /// Parse a payload value, coercing absence and unknown values to the
    /// default `Warning`
    pub fn from_payload(raw: Option<&str>) -> Self {
        match raw {
            Some("info") => Self::Info,
            Some("warning") => Self::Warning,
            Some("critical") => Self::Critical,
            Some(other) => {
                debug!(level = other, "unknown alert level coerced to warning");
                Self::Warning
            }
            None => Self::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        assert_eq!(AlertLevel::from_payload(Some("info")), AlertLevel::Info);
        assert_eq!(AlertLevel::from_payload(Some("warning")), AlertLevel::Warning);
        assert_eq!(AlertLevel::from_payload(Some("critical")), AlertLevel::Critical);
    }

    #[test]
    fn test_absent_defaults_to_warning() {
        assert_eq!(AlertLevel::from_payload(None), AlertLevel::Warning);
    }

    #[test]
    fn test_unknown_coerced_to_warning() {
        assert_eq!(AlertLevel::from_payload(Some("severe")), AlertLevel::Warning);
        assert_eq!(AlertLevel::from_payload(Some("CRITICAL")), AlertLevel::Warning);
    }

    #[test]
    fn test_serialized_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&AlertLevel::Critical).unwrap(), "\"critical\"");
    }
}
