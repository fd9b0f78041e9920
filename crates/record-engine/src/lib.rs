//! Record Query & Aggregation Engine
//!
//! Orchestrates validation, query composition, and the store adapter for
//! the six record lifecycle operations plus alerts. Stateless per
//! request; the transport layer above only maps HTTP onto these calls.

mod error;
mod query;
mod service;

pub use error::ServiceError;
pub use query::{for_date, for_station, list_all};
pub use service::RecordService;
