//! Interfaces for cryptographic operations.

use domain::auth::password::{Password, PasswordHash};

use crate::error::Result;

/// Port for password hashing operations.
pub trait PasswordHasher: Send + Sync {
    /// Hash a password into its stored form.
    fn hash(&self, password: &Password) -> Result<PasswordHash>;
}
