//! Account repository port.

use async_trait::async_trait;
use domain::identity::login::Login;

use crate::dto::AccountDto;
use crate::error::Result;

/// Port for account persistence operations.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its login.
    async fn find_by_login(
        &self,
        login: &Login,
    ) -> Result<Option<AccountDto>>;

    /// Insert a new account.
    ///
    /// Implementations must return
    /// [`ApplicationError::DuplicateLogin`](crate::error::ApplicationError::DuplicateLogin)
    /// rather than overwrite an existing account.
    async fn insert(&self, account: &AccountDto) -> Result<()>;
}
