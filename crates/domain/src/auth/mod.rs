//! Authentication-related value objects.

pub mod password;
