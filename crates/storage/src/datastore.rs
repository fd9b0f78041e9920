//! Store Handle with Lazy, Single-Flight Connect

use std::sync::Arc;

use record_validator::{NewAlert, NewRecord, RecordPatch};
use tokio::sync::OnceCell;
use tracing::{debug, info};
use uuid::Uuid;

use crate::collections::Collections;
use crate::models::{Alert, WeatherRecord};
use crate::query::RecordQuery;
use crate::stats::StatsSummary;
use crate::StorageError;

/// Document store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store location; the in-process implementation only logs it
    pub uri: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: "memory://weatherhub".to_string(),
        }
    }
}

/// The single shared store handle
///
/// The underlying collections are established lazily, at most once per
/// process. Concurrent callers before the first successful connection
/// await the in-flight attempt instead of opening their own.
pub struct Datastore {
    config: StoreConfig,
    collections: OnceCell<Arc<Collections>>,
}

impl Datastore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            collections: OnceCell::new(),
        }
    }

    /// Idempotent connect; single-flighted by the `OnceCell`
    async fn collections(&self) -> Result<&Arc<Collections>, StorageError> {
        self.collections
            .get_or_try_init(|| async {
                if self.config.uri.is_empty() {
                    return Err(StorageError::Unavailable(
                        "store uri is empty".to_string(),
                    ));
                }
                info!(uri = %self.config.uri, "opening document store");
                Ok(Arc::new(Collections::new()))
            })
            .await
    }

    pub async fn insert_record(&self, new: NewRecord) -> Result<WeatherRecord, StorageError> {
        self.collections().await?.insert_record(new)
    }

    pub async fn record_by_id(&self, id: &str) -> Result<Option<WeatherRecord>, StorageError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        self.collections().await?.record_by_id(id)
    }

    pub async fn query_records(
        &self,
        query: &RecordQuery,
    ) -> Result<Vec<WeatherRecord>, StorageError> {
        self.collections().await?.query_records(query)
    }

    /// Full-replace update; see `Collections::replace_record`
    pub async fn replace_record(
        &self,
        id: &str,
        patch: RecordPatch,
    ) -> Result<Option<WeatherRecord>, StorageError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        self.collections().await?.replace_record(id, patch)
    }

    /// Partial-merge update; see `Collections::merge_record`
    pub async fn merge_record(
        &self,
        id: &str,
        patch: RecordPatch,
    ) -> Result<Option<WeatherRecord>, StorageError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        self.collections().await?.merge_record(id, patch)
    }

    pub async fn delete_record(&self, id: &str) -> Result<Option<WeatherRecord>, StorageError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        self.collections().await?.delete_record(id)
    }

    pub async fn record_stats(&self) -> Result<StatsSummary, StorageError> {
        self.collections().await?.record_stats()
    }

    pub async fn record_count(&self) -> Result<usize, StorageError> {
        self.collections().await?.record_count()
    }

    pub async fn insert_alert(&self, new: NewAlert) -> Result<Alert, StorageError> {
        self.collections().await?.insert_alert(new)
    }

    pub async fn list_alerts(&self) -> Result<Vec<Alert>, StorageError> {
        self.collections().await?.list_alerts()
    }

    pub async fn delete_alert(&self, id: &str) -> Result<Option<Alert>, StorageError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        self.collections().await?.delete_alert(id)
    }

    pub async fn alert_count(&self) -> Result<usize, StorageError> {
        self.collections().await?.alert_count()
    }
}

impl Default for Datastore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

/// Identifiers that cannot address any document are "no such record",
/// never an error
fn parse_id(raw: &str) -> Option<Uuid> {
    match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            debug!(id = raw, "malformed identifier treated as not-found");
            None
        }
    }
}
