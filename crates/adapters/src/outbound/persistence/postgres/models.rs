//! Database models for PostgreSQL.

use application::dto::AccountDto;
use sqlx::FromRow;

/// Account record as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRecord {
    pub login: String,
    pub password_hash: String,
    pub full_name: String,
}

impl From<AccountRecord> for AccountDto {
    fn from(record: AccountRecord) -> Self {
        Self {
            login: record.login,
            password_hash: record.password_hash,
            full_name: record.full_name,
        }
    }
}

impl From<&AccountDto> for AccountRecord {
    fn from(dto: &AccountDto) -> Self {
        Self {
            login: dto.login.clone(),
            password_hash: dto.password_hash.clone(),
            full_name: dto.full_name.clone(),
        }
    }
}
