//! Application services implementing business logic.

pub mod create_account;

pub use create_account::*;
