//! Data Transfer Objects for the application layer.
//!
//! DTOs are used to transfer data between layers without exposing domain
//! entities.

use domain::auth::password::PasswordHash;
use domain::identity::account::Account;
use domain::identity::login::Login;

use crate::error::{Result, ToInternal};

/// Request DTO for account creation.
#[derive(Clone)]
pub struct CreateAccountRequestDto {
    /// Full name, surname included.
    pub full_name: String,
    /// Plaintext password.
    pub password: String,
}

impl CreateAccountRequestDto {
    pub fn new(
        full_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CreateAccountRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountRequestDto")
            .field("full_name", &self.full_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// DTO for account data (used between application and repository).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDto {
    pub login: String,
    pub password_hash: String,
    pub full_name: String,
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self {
            login: account.login().to_string(),
            password_hash: account.password_hash().as_str().to_owned(),
            full_name: account.full_name().to_owned(),
        }
    }
}

impl AccountDto {
    /// Rebuild the domain entity from stored data.
    ///
    /// A record that does not hold a valid login or digest is reported as
    /// a repository failure.
    pub fn try_into_account(self) -> Result<Account> {
        let login = Login::parse(self.login).catch()?;
        let password_hash = PasswordHash::parse(self.password_hash).catch()?;

        Ok(Account::new(login, password_hash, self.full_name))
    }
}
