//! In-memory account repository.
//!
//! Accounts live as long as the process. Suited to tests and to running
//! the service without a database.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use application::dto::AccountDto;
use application::error::{ApplicationError, Result};
use application::ports::outbound::AccountRepository;
use async_trait::async_trait;
use domain::identity::login::Login;

/// Account repository keeping records in a map keyed by login.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, AccountDto>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty [`InMemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_login(
        &self,
        login: &Login,
    ) -> Result<Option<AccountDto>> {
        let accounts =
            self.accounts.read().unwrap_or_else(PoisonError::into_inner);

        Ok(accounts.get(login.as_str()).cloned())
    }

    async fn insert(&self, account: &AccountDto) -> Result<()> {
        let mut accounts =
            self.accounts.write().unwrap_or_else(PoisonError::into_inner);

        match accounts.entry(account.login.clone()) {
            Entry::Occupied(_) => Err(ApplicationError::DuplicateLogin {
                login: account.login.clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(account.clone());
                Ok(())
            },
        }
    }
}
