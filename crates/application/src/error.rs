//! Application-level errors.

use domain::error::DomainError;

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors that can occur in the application layer.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    /// Input refused by a business rule.
    #[error(transparent)]
    InvalidArgument(#[from] DomainError),

    #[error("login {login} is already taken")]
    DuplicateLogin { login: String },
    #[error("account {login} was not found after being inserted")]
    AccountNotPersisted { login: String },

    /// Reached a state validation should have made impossible.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),

    #[error("account repository failed")]
    Repository(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApplicationError {
    pub fn repository<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Repository(Box::new(err))
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(ApplicationError::repository)
    }
}
