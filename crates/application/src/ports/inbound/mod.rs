//! These traits define what the application can do.

pub mod create_account;

pub use create_account::*;
