//! Route Handlers

pub mod alerts;
pub mod records;
