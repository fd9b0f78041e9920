//! Payload Validation and Normalization
//!
//! Turns raw inbound payloads into normalized records, with unknown fields
//! dropped and known fields coerced to their semantic type. Pure functions,
//! no I/O.

mod error;
mod level;
mod normalized;
mod payload;
mod validator;

pub use error::ValidationError;
pub use level::AlertLevel;
pub use normalized::{NewAlert, NewRecord, RecordPatch};
pub use payload::{AlertDraft, NumberLike, RecordDraft};
pub use validator::{validate_alert, validate_create, validate_patch};
