//! Account entity.

use crate::auth::password::PasswordHash;
use crate::identity::login::Login;

/// A user account.
///
/// Accounts are only ever created; there is no way to mutate one after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    login: Login,
    password_hash: PasswordHash,
    full_name: String,
}

impl Account {
    /// Creates a new [`Account`].
    pub fn new(
        login: Login,
        password_hash: PasswordHash,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            login,
            password_hash,
            full_name: full_name.into(),
        }
    }

    /// Unique handle of the account.
    #[inline]
    pub fn login(&self) -> &Login {
        &self.login
    }

    #[inline]
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Name as supplied on creation.
    #[inline]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}
