//! Application layer of the account service.
//!
//! Use cases live in [`usecases`]; what they need from the outside world
//! is described by the traits in [`ports::outbound`].

#![forbid(unsafe_code)]

pub mod dto;
pub mod error;
pub mod ports;
pub mod usecases;
