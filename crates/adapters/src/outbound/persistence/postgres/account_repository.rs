//! PostgreSQL implementation for account repository.

use application::dto::AccountDto;
use application::error::{ApplicationError, Result, ToInternal};
use application::ports::outbound::AccountRepository;
use async_trait::async_trait;
use domain::identity::login::Login;
use sqlx::PgPool;

use super::models::AccountRecord;

/// PostgreSQL account repository.
///
/// Expects the `accounts` table, `login` being its primary key.
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_login(
        &self,
        login: &Login,
    ) -> Result<Option<AccountDto>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT login, password_hash, full_name
            FROM accounts
            WHERE login = $1
            "#,
        )
        .bind(login.as_str())
        .fetch_optional(&self.pool)
        .await
        .catch()?;

        Ok(record.map(AccountDto::from))
    }

    async fn insert(&self, account: &AccountDto) -> Result<()> {
        let record = AccountRecord::from(account);

        let result = sqlx::query(
            r#"
            INSERT INTO accounts (login, password_hash, full_name)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&record.login)
        .bind(&record.password_hash)
        .bind(&record.full_name)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                Err(ApplicationError::DuplicateLogin {
                    login: record.login,
                })
            },
            Err(err) => Err(ApplicationError::repository(err)),
        }
    }
}
