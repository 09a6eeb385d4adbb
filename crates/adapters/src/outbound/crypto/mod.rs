//! Cryptographic adapters.

mod sha3;

pub use crate::outbound::crypto::sha3::Sha3PasswordHasher;
