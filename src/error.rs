//! Error handler for service startup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InitError>;

/// Enum representing failures while wiring the service.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("cannot connect to postgres: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
