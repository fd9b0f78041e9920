//! In-Process Collection Implementation
//!
//! Backs the `Datastore` handle. Each collection guards its documents
//! with a mutex that is never held across an await point; atomicity of
//! a single insert/update/delete is the lock's critical section.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use record_validator::{NewAlert, NewRecord, RecordPatch};
use tracing::debug;
use uuid::Uuid;

use crate::models::{Alert, WeatherRecord};
use crate::query::{RecordFilter, RecordQuery, SortOrder};
use crate::stats::{self, StatsSummary};
use crate::StorageError;

/// The two document collections
pub(crate) struct Collections {
    records: Mutex<Vec<WeatherRecord>>,
    alerts: Mutex<Vec<Alert>>,
}

fn lock<T>(collection: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    collection
        .lock()
        .map_err(|e| StorageError::Operation(format!("Lock error: {}", e)))
}

impl Collections {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Insert a record, assigning identifier and store timestamps
    pub fn insert_record(&self, new: NewRecord) -> Result<WeatherRecord, StorageError> {
        let now = Utc::now();
        let record = WeatherRecord {
            id: Uuid::new_v4(),
            station: new.station,
            recorded_at: new.recorded_at,
            temperature: new.temperature,
            humidity: new.humidity,
            pressure: new.pressure,
            wind_speed: new.wind_speed,
            wind_direction: new.wind_direction,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };

        let mut records = lock(&self.records)?;
        records.push(record.clone());
        debug!(id = %record.id, "inserted record");
        Ok(record)
    }

    pub fn record_by_id(&self, id: Uuid) -> Result<Option<WeatherRecord>, StorageError> {
        let records = lock(&self.records)?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    /// Execute a composed filter/sort/limit specification
    pub fn query_records(&self, query: &RecordQuery) -> Result<Vec<WeatherRecord>, StorageError> {
        let records = lock(&self.records)?;

        let mut matched: Vec<WeatherRecord> = records
            .iter()
            .filter(|r| match &query.filter {
                RecordFilter::All => true,
                RecordFilter::RecordedWithin { start, end } => {
                    r.recorded_at >= *start && r.recorded_at < *end
                }
                RecordFilter::Station(name) => r.station.as_deref() == Some(name.as_str()),
            })
            .cloned()
            .collect();

        match query.sort {
            SortOrder::RecordedAtDesc => {
                matched.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at))
            }
            SortOrder::RecordedAtAsc => {
                matched.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at))
            }
            SortOrder::Unsorted => {}
        }

        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }
        Ok(matched)
    }

    /// Full-replace update: every mutable field takes the patch's value,
    /// clearing the ones the payload omitted. `recordedAt` is the one
    /// exception: when omitted, the stored instant is kept.
    pub fn replace_record(
        &self,
        id: Uuid,
        patch: RecordPatch,
    ) -> Result<Option<WeatherRecord>, StorageError> {
        let mut records = lock(&self.records)?;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        let RecordPatch {
            station,
            recorded_at,
            temperature,
            humidity,
            pressure,
            wind_speed,
            wind_direction,
            notes,
        } = patch;

        record.station = station;
        if let Some(instant) = recorded_at {
            record.recorded_at = instant;
        }
        record.temperature = temperature;
        record.humidity = humidity;
        record.pressure = pressure;
        record.wind_speed = wind_speed;
        record.wind_direction = wind_direction;
        record.notes = notes;
        record.updated_at = Utc::now();

        debug!(id = %id, "replaced record");
        Ok(Some(record.clone()))
    }

    /// Partial-merge update: only fields present in the patch are
    /// written; omitted fields keep their stored value.
    pub fn merge_record(
        &self,
        id: Uuid,
        patch: RecordPatch,
    ) -> Result<Option<WeatherRecord>, StorageError> {
        let mut records = lock(&self.records)?;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        let RecordPatch {
            station,
            recorded_at,
            temperature,
            humidity,
            pressure,
            wind_speed,
            wind_direction,
            notes,
        } = patch;

        if let Some(v) = station {
            record.station = Some(v);
        }
        if let Some(v) = recorded_at {
            record.recorded_at = v;
        }
        if let Some(v) = temperature {
            record.temperature = Some(v);
        }
        if let Some(v) = humidity {
            record.humidity = Some(v);
        }
        if let Some(v) = pressure {
            record.pressure = Some(v);
        }
        if let Some(v) = wind_speed {
            record.wind_speed = Some(v);
        }
        if let Some(v) = wind_direction {
            record.wind_direction = Some(v);
        }
        if let Some(v) = notes {
            record.notes = Some(v);
        }
        record.updated_at = Utc::now();

        debug!(id = %id, "merged record");
        Ok(Some(record.clone()))
    }

    pub fn delete_record(&self, id: Uuid) -> Result<Option<WeatherRecord>, StorageError> {
        let mut records = lock(&self.records)?;
        let Some(position) = records.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let removed = records.remove(position);
        debug!(id = %id, "deleted record");
        Ok(Some(removed))
    }

    /// Aggregation primitive over the full record collection
    pub fn record_stats(&self) -> Result<StatsSummary, StorageError> {
        let records = lock(&self.records)?;
        Ok(stats::summarize(records.iter()))
    }

    pub fn record_count(&self) -> Result<usize, StorageError> {
        Ok(lock(&self.records)?.len())
    }

    /// Insert an alert, assigning identifier and creation timestamp
    pub fn insert_alert(&self, new: NewAlert) -> Result<Alert, StorageError> {
        let alert = Alert {
            id: Uuid::new_v4(),
            title: new.title,
            message: new.message,
            level: new.level,
            active: new.active,
            created_at: Utc::now(),
        };

        let mut alerts = lock(&self.alerts)?;
        alerts.push(alert.clone());
        debug!(id = %alert.id, level = alert.level.as_str(), "inserted alert");
        Ok(alert)
    }

    /// All alerts, newest first
    pub fn list_alerts(&self) -> Result<Vec<Alert>, StorageError> {
        let alerts = lock(&self.alerts)?;
        Ok(alerts.iter().rev().cloned().collect())
    }

    pub fn delete_alert(&self, id: Uuid) -> Result<Option<Alert>, StorageError> {
        let mut alerts = lock(&self.alerts)?;
        let Some(position) = alerts.iter().position(|a| a.id == id) else {
            return Ok(None);
        };
        let removed = alerts.remove(position);
        debug!(id = %id, "deleted alert");
        Ok(Some(removed))
    }

    pub fn alert_count(&self) -> Result<usize, StorageError> {
        Ok(lock(&self.alerts)?.len())
    }
}
