//! Account creation service.
//!
//! Validates a full name and a password, derives a unique login from the
//! name and stores the account. This crate wires the use case from
//! `config.yaml`; the logic itself lives in the `domain`, `application`
//! and `adapters` crates.

#![forbid(unsafe_code)]

pub mod config;
mod database;
pub mod error;
pub mod telemetry;

use std::sync::Arc;

use adapters::outbound::crypto::Sha3PasswordHasher;
use adapters::outbound::persistence::memory::InMemoryAccountRepository;
use adapters::outbound::persistence::postgres::PgAccountRepository;
use adapters::outbound::telemetry::TracingTelemetry;
use application::ports::inbound::CreateAccount;
use application::ports::outbound::AccountRepository;
use application::usecases::CreateAccountUseCase;

pub use application::dto::CreateAccountRequestDto;
pub use application::error::ApplicationError;
pub use domain::identity::account::Account;

/// State shared with whatever hosts the service.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub accounts: Arc<dyn CreateAccount>,
}

/// Initialize the application state.
pub async fn initialize_state(
    config: Arc<config::Configuration>,
) -> error::Result<AppState> {
    let account_repo: Box<dyn AccountRepository> = match config.postgres {
        Some(ref postgres) => {
            let db = database::Database::from_config(postgres).await?;
            // execute migrations scripts on start.
            db.migrate().await?;

            Box::new(PgAccountRepository::new(db.postgres))
        },
        None => {
            tracing::warn!(
                "missing `postgres` entry on `config.yaml` file, accounts are \
                 kept in memory"
            );

            Box::new(InMemoryAccountRepository::new())
        },
    };

    let accounts = CreateAccountUseCase::new(
        account_repo,
        Box::new(Sha3PasswordHasher::new()),
        Box::new(TracingTelemetry::new()),
    );

    Ok(AppState {
        config,
        accounts: Arc::new(accounts),
    })
}
