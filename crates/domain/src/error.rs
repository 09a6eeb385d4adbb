//! Custom error handler for domain (core).

pub type Result<T> = std::result::Result<T, DomainError>;

/// Enum representing custom domain errors.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error(
        "full name is required, must be between {min} and {max} characters \
         and must include a surname"
    )]
    InvalidFullName { min: usize, max: usize },

    #[error(
        "password is required and must be between {min} and {max} characters"
    )]
    InvalidPasswordLength { min: usize, max: usize },
    #[error(
        "password must contain only letters and digits, with at least one \
         of each"
    )]
    InvalidPasswordCharacters,

    #[error("login must be a non-empty lowercase ascii handle")]
    InvalidLogin,
    #[error("password hash must be a lowercase hex sha3-256 digest")]
    InvalidPasswordHash,
}
