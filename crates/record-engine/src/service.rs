//! Record Lifecycle Controller

use record_validator::{
    validate_alert, validate_create, validate_patch, AlertDraft, RecordDraft,
};
use storage::{Alert, Datastore, StatsSummary, WeatherRecord};
use tracing::info;

use crate::error::ServiceError;
use crate::query;

/// Orchestrates validator, query composer, and store adapter
///
/// Stateless per request; the one shared resource is the lazily
/// connected store handle it owns.
pub struct RecordService {
    store: Datastore,
}

impl RecordService {
    pub fn new(store: Datastore) -> Self {
        Self { store }
    }

    /// Validate and insert a new record
    pub async fn create_record(&self, draft: RecordDraft) -> Result<WeatherRecord, ServiceError> {
        let new = validate_create(&draft)?;
        let record = self.store.insert_record(new).await?;
        info!(id = %record.id, "created record");
        Ok(record)
    }

    pub async fn record_by_id(&self, id: &str) -> Result<WeatherRecord, ServiceError> {
        self.store
            .record_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("record"))
    }

    /// Most recent record by observation instant
    pub async fn latest_record(&self) -> Result<WeatherRecord, ServiceError> {
        let mut records = self.store.query_records(&query::list_all(Some(1))).await?;
        records.pop().ok_or(ServiceError::NotFound("record"))
    }

    /// All records, newest first; an empty sequence is success
    pub async fn list_records(&self, limit: Option<i64>) -> Result<Vec<WeatherRecord>, ServiceError> {
        Ok(self.store.query_records(&query::list_all(limit)).await?)
    }

    /// Records within one calendar day, ascending
    pub async fn records_for_date(&self, date: &str) -> Result<Vec<WeatherRecord>, ServiceError> {
        let query = query::for_date(date)?;
        Ok(self.store.query_records(&query).await?)
    }

    /// Records for one station, store's natural order
    pub async fn records_for_station(
        &self,
        name: &str,
    ) -> Result<Vec<WeatherRecord>, ServiceError> {
        Ok(self.store.query_records(&query::for_station(name)).await?)
    }

    /// Full-replace update: fields omitted from the payload are cleared,
    /// except `recordedAt` (kept) and the store-owned fields
    pub async fn replace_record(
        &self,
        id: &str,
        draft: RecordDraft,
    ) -> Result<WeatherRecord, ServiceError> {
        let patch = validate_patch(&draft)?;
        self.store
            .replace_record(id, patch)
            .await?
            .ok_or(ServiceError::NotFound("record"))
    }

    /// Partial-merge update: only fields present in the payload are
    /// validated and written
    pub async fn merge_record(
        &self,
        id: &str,
        draft: RecordDraft,
    ) -> Result<WeatherRecord, ServiceError> {
        let patch = validate_patch(&draft)?;
        self.store
            .merge_record(id, patch)
            .await?
            .ok_or(ServiceError::NotFound("record"))
    }

    pub async fn delete_record(&self, id: &str) -> Result<WeatherRecord, ServiceError> {
        let removed = self
            .store
            .delete_record(id)
            .await?
            .ok_or(ServiceError::NotFound("record"))?;
        info!(id = %removed.id, "deleted record");
        Ok(removed)
    }

    /// Summary statistics over the whole collection
    pub async fn record_stats(&self) -> Result<StatsSummary, ServiceError> {
        Ok(self.store.record_stats().await?)
    }

    pub async fn create_alert(&self, draft: AlertDraft) -> Result<Alert, ServiceError> {
        let new = validate_alert(&draft)?;
        let alert = self.store.insert_alert(new).await?;
        info!(id = %alert.id, level = alert.level.as_str(), "created alert");
        Ok(alert)
    }

    pub async fn list_alerts(&self) -> Result<Vec<Alert>, ServiceError> {
        Ok(self.store.list_alerts().await?)
    }

    pub async fn delete_alert(&self, id: &str) -> Result<Alert, ServiceError> {
        self.store
            .delete_alert(id)
            .await?
            .ok_or(ServiceError::NotFound("alert"))
    }

    pub async fn record_count(&self) -> Result<usize, ServiceError> {
        Ok(self.store.record_count().await?)
    }

    pub async fn alert_count(&self) -> Result<usize, ServiceError> {
        Ok(self.store.alert_count().await?)
    }
}

impl Default for RecordService {
    fn default() -> Self {
        Self::new(Datastore::default())
    }
}
