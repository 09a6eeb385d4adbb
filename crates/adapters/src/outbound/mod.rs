//! Outbound adapters.

pub mod crypto;
pub mod persistence;
pub mod telemetry;
