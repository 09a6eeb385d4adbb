//! Account identity: who the account belongs to and how it is named.

pub mod account;
pub mod login;
pub mod name;
