//! Adapters plugging the account service into real infrastructure.

#![forbid(unsafe_code)]

pub mod outbound;
