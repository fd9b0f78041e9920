//! Field Validation and Type Coercion

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::error::ValidationError;
use crate::level::AlertLevel;
use crate::normalized::{NewAlert, NewRecord, RecordPatch};
use crate::payload::{AlertDraft, NumberLike, RecordDraft};

/// Validate a payload for record creation
///
/// `recordedAt` is required and must parse; every other field is optional
/// and checked only for type coercion.
pub fn validate_create(draft: &RecordDraft) -> Result<NewRecord, ValidationError> {
    let raw = draft
        .recorded_at
        .as_deref()
        .ok_or(ValidationError::MissingField("recordedAt"))?;

    Ok(NewRecord {
        station: draft.station.clone(),
        recorded_at: parse_timestamp("recordedAt", raw)?,
        temperature: coerce_number("temperature", draft.temperature.as_ref())?,
        humidity: coerce_number("humidity", draft.humidity.as_ref())?,
        pressure: coerce_number("pressure", draft.pressure.as_ref())?,
        wind_speed: coerce_number("windSpeed", draft.wind_speed.as_ref())?,
        wind_direction: draft.wind_direction.clone(),
        notes: draft.notes.clone(),
    })
}

/// Validate a payload for record update
///
/// Only fields present in the payload are validated; `recordedAt` is
/// optional but must parse when present.
pub fn validate_patch(draft: &RecordDraft) -> Result<RecordPatch, ValidationError> {
    let recorded_at = match draft.recorded_at.as_deref() {
        Some(raw) => Some(parse_timestamp("recordedAt", raw)?),
        None => None,
    };

    Ok(RecordPatch {
        station: draft.station.clone(),
        recorded_at,
        temperature: coerce_number("temperature", draft.temperature.as_ref())?,
        humidity: coerce_number("humidity", draft.humidity.as_ref())?,
        pressure: coerce_number("pressure", draft.pressure.as_ref())?,
        wind_speed: coerce_number("windSpeed", draft.wind_speed.as_ref())?,
        wind_direction: draft.wind_direction.clone(),
        notes: draft.notes.clone(),
    })
}

/// Validate a payload for alert creation
///
/// `title` and `message` are required and non-empty; `level` coerces to
/// `warning` when absent or unknown; `active` defaults to true.
pub fn validate_alert(draft: &AlertDraft) -> Result<NewAlert, ValidationError> {
    let title = require_text("title", draft.title.as_deref())?;
    let message = require_text("message", draft.message.as_deref())?;

    Ok(NewAlert {
        title,
        message,
        level: AlertLevel::from_payload(draft.level.as_deref()),
        active: draft.active.unwrap_or(true),
    })
}

/// Parse an RFC 3339 timestamp or a bare calendar date (midnight UTC)
fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    debug!(field, value = raw, "rejected unparseable timestamp");
    Err(ValidationError::InvalidTimestamp {
        field,
        value: raw.to_string(),
    })
}

/// Coerce a number-or-numeric-string field, rejecting non-finite values
fn coerce_number(
    field: &'static str,
    value: Option<&NumberLike>,
) -> Result<Option<f64>, ValidationError> {
    match value {
        None => Ok(None),
        Some(NumberLike::Number(n)) if n.is_finite() => Ok(Some(*n)),
        Some(NumberLike::Number(n)) => Err(ValidationError::NotNumeric {
            field,
            value: n.to_string(),
        }),
        Some(NumberLike::Text(raw)) => match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Some(n)),
            _ => {
                debug!(field, value = raw.as_str(), "rejected non-numeric value");
                Err(ValidationError::NotNumeric {
                    field,
                    value: raw.clone(),
                })
            }
        },
    }
}

fn require_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    let text = value.ok_or(ValidationError::MissingField(field))?;
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(json: &str) -> RecordDraft {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_create_requires_recorded_at() {
        let err = validate_create(&RecordDraft::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("recordedAt"));
    }

    #[test]
    fn test_create_parses_rfc3339() {
        let record = validate_create(&draft(
            r#"{"recordedAt": "2025-12-04T10:30:00+02:00", "temperature": 25.5}"#,
        ))
        .unwrap();
        assert_eq!(
            record.recorded_at,
            Utc.with_ymd_and_hms(2025, 12, 4, 8, 30, 0).unwrap()
        );
        assert_eq!(record.temperature, Some(25.5));
    }

    #[test]
    fn test_create_parses_bare_date_as_midnight_utc() {
        let record = validate_create(&draft(r#"{"recordedAt": "2025-12-04"}"#)).unwrap();
        assert_eq!(
            record.recorded_at,
            Utc.with_ymd_and_hms(2025, 12, 4, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_create_rejects_bad_timestamp() {
        let err = validate_create(&draft(r#"{"recordedAt": "yesterday"}"#)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidTimestamp { field: "recordedAt", .. }
        ));
    }

    #[test]
    fn test_numeric_string_coerces() {
        let record = validate_create(&draft(
            r#"{"recordedAt": "2025-12-04", "humidity": "60.5", "windSpeed": " 12 "}"#,
        ))
        .unwrap();
        assert_eq!(record.humidity, Some(60.5));
        assert_eq!(record.wind_speed, Some(12.0));
    }

    #[test]
    fn test_non_numeric_string_fails_naming_field() {
        let err = validate_create(&draft(
            r#"{"recordedAt": "2025-12-04", "pressure": "high"}"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotNumeric {
                field: "pressure",
                value: "high".to_string()
            }
        );
    }

    #[test]
    fn test_absent_measurement_stays_absent() {
        let record = validate_create(&draft(r#"{"recordedAt": "2025-12-04"}"#)).unwrap();
        assert_eq!(record.temperature, None);
    }

    #[test]
    fn test_patch_allows_missing_recorded_at() {
        let patch = validate_patch(&draft(r#"{"humidity": 70}"#)).unwrap();
        assert_eq!(patch.recorded_at, None);
        assert_eq!(patch.humidity, Some(70.0));
        assert_eq!(patch.temperature, None);
    }

    #[test]
    fn test_patch_still_validates_present_fields() {
        let err = validate_patch(&draft(r#"{"recordedAt": "not a date"}"#)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_alert_requires_title_and_message() {
        let err = validate_alert(&AlertDraft::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("title"));

        let draft: AlertDraft =
            serde_json::from_str(r#"{"title": "Storm", "message": "  "}"#).unwrap();
        assert_eq!(
            validate_alert(&draft).unwrap_err(),
            ValidationError::EmptyField("message")
        );
    }

    #[test]
    fn test_alert_level_defaults_and_coerces() {
        let draft: AlertDraft =
            serde_json::from_str(r#"{"title": "Storm", "message": "incoming"}"#).unwrap();
        let alert = validate_alert(&draft).unwrap();
        assert_eq!(alert.level, AlertLevel::Warning);
        assert!(alert.active);

        let draft: AlertDraft = serde_json::from_str(
            r#"{"title": "Storm", "message": "incoming", "level": "apocalyptic", "active": false}"#,
        )
        .unwrap();
        let alert = validate_alert(&draft).unwrap();
        assert_eq!(alert.level, AlertLevel::Warning);
        assert!(!alert.active);
    }
}
