//! Storage Layer
//!
//! Document store adapter for the two collections (records, alerts).
//! The only component with I/O side effects; everything above it is
//! synchronous and pure given the data it is handed.

mod collections;
mod datastore;
mod models;
mod query;
mod stats;

pub use datastore::{Datastore, StoreConfig};
pub use models::{Alert, WeatherRecord};
pub use query::{RecordFilter, RecordQuery, SortOrder};
pub use stats::StatsSummary;

use thiserror::Error;

/// Storage errors
///
/// Not-found is not an error at this layer: lookup operations return
/// `Option`, and a malformed identifier addresses no document.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Store connection could not be established
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
    /// A store operation failed after connection
    #[error("Store operation failed: {0}")]
    Operation(String),
}
