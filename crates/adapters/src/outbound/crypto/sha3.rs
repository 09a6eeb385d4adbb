//! SHA3-256 password hasher.
//!
//! Digests are unsalted so they stay comparable with hashes already
//! stored by earlier deployments.

use application::error::Result;
use application::ports::outbound::PasswordHasher;
use domain::auth::password::{Password, PasswordHash};
use sha3::{Digest, Sha3_256};

/// One-shot SHA3-256 hasher rendering lowercase hex.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha3PasswordHasher;

impl Sha3PasswordHasher {
    /// Create a new [`Sha3PasswordHasher`].
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Sha3PasswordHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash> {
        let digest = Sha3_256::digest(password.as_bytes());

        Ok(PasswordHash::parse(hex::encode(digest))?)
    }
}
