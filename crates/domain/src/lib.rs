//! Core of the account service.
//!
//! Holds the account entity and the value objects guarding its business
//! rules. Nothing here performs I/O.

#![forbid(unsafe_code)]

pub mod auth;
pub mod error;
pub mod identity;
