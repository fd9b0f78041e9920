//! Collection-Wide Aggregation

use serde::{Deserialize, Serialize};

use crate::models::WeatherRecord;

/// Summary statistics over the entire record collection
///
/// Averages count only records where the field is present: a missing
/// measurement is excluded from both the sum and the divisor. An empty
/// population resolves to `None` (serialized as `null`), never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub count: u64,
    pub avg_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
}

/// Fold the aggregation over all records
pub(crate) fn summarize<'a, I>(records: I) -> StatsSummary
where
    I: IntoIterator<Item = &'a WeatherRecord>,
{
    let mut count = 0u64;
    let mut temp_sum = 0.0;
    let mut temp_n = 0u64;
    let mut humidity_sum = 0.0;
    let mut humidity_n = 0u64;
    let mut min_temp: Option<f64> = None;
    let mut max_temp: Option<f64> = None;

    for record in records {
        count += 1;
        if let Some(t) = record.temperature {
            temp_sum += t;
            temp_n += 1;
            min_temp = Some(min_temp.map_or(t, |m| m.min(t)));
            max_temp = Some(max_temp.map_or(t, |m| m.max(t)));
        }
        if let Some(h) = record.humidity {
            humidity_sum += h;
            humidity_n += 1;
        }
    }

    StatsSummary {
        count,
        avg_temp: (temp_n > 0).then(|| temp_sum / temp_n as f64),
        avg_humidity: (humidity_n > 0).then(|| humidity_sum / humidity_n as f64),
        min_temp,
        max_temp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn record(temperature: Option<f64>, humidity: Option<f64>) -> WeatherRecord {
        let now = Utc::now();
        WeatherRecord {
            id: Uuid::new_v4(),
            station: None,
            recorded_at: now,
            temperature,
            humidity,
            pressure: None,
            wind_speed: None,
            wind_direction: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_collection() {
        let summary = summarize([]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_temp, None);
        assert_eq!(summary.avg_humidity, None);
        assert_eq!(summary.min_temp, None);
        assert_eq!(summary.max_temp, None);
    }

    #[test]
    fn test_missing_fields_excluded_from_sum_and_divisor() {
        let records = vec![
            record(Some(10.0), None),
            record(Some(20.0), Some(50.0)),
            record(None, None),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.avg_temp, Some(15.0));
        assert_eq!(summary.avg_humidity, Some(50.0));
        assert_eq!(summary.min_temp, Some(10.0));
        assert_eq!(summary.max_temp, Some(20.0));
    }

    #[test]
    fn test_zero_temperature_is_a_value() {
        let records = vec![record(Some(0.0), None)];
        let summary = summarize(&records);
        assert_eq!(summary.min_temp, Some(0.0));
        assert_eq!(summary.max_temp, Some(0.0));
        assert_eq!(summary.avg_temp, Some(0.0));
    }

    #[test]
    fn test_no_temperatures_present() {
        let records = vec![record(None, Some(40.0)), record(None, Some(60.0))];
        let summary = summarize(&records);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg_temp, None);
        assert_eq!(summary.min_temp, None);
        assert_eq!(summary.avg_humidity, Some(50.0));
    }

    #[test]
    fn test_nulls_serialized_explicitly() {
        let json = serde_json::to_value(summarize([])).unwrap();
        assert_eq!(json["avgTemp"], serde_json::Value::Null);
        assert_eq!(json["minTemp"], serde_json::Value::Null);
        assert_eq!(json["count"], 0);
    }
}
