//! Boundaries of the application layer.

pub mod inbound;
pub mod outbound;
