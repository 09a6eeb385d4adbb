//! Password logic.

use zeroize::Zeroizing;

use crate::error::{DomainError, Result};

/// Value object of a plaintext password.
///
/// The underlying buffer is wiped when the value is dropped.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Maximum password length.
    pub const MAX_LENGTH: usize = 15;
    /// Minimum password length.
    pub const MIN_LENGTH: usize = 6;

    /// Create a new [`Password`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the password is not between [`Self::MIN_LENGTH`]
    /// and [`Self::MAX_LENGTH`] characters, or if it is not made only of
    /// letters and digits with at least one ascii letter and one ascii
    /// digit. Length is checked first.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = Zeroizing::new(value.into());

        let len = value.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&len) {
            return Err(DomainError::InvalidPasswordLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }

        let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        let alphanumeric = value.chars().all(char::is_alphanumeric);

        if !(has_letter && has_digit && alphanumeric) {
            return Err(DomainError::InvalidPasswordCharacters);
        }

        Ok(Self(value))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the UTF-8 bytes of the password.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// A hashed password stored in the database.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Length of a hex encoded SHA3-256 digest.
    pub const LENGTH: usize = 64;

    /// Converts a [`String`] into a valid [`PasswordHash`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a 64 characters lowercase
    /// hexadecimal digest.
    pub fn parse(digest: impl Into<String>) -> Result<Self> {
        let digest = digest.into();

        let lower_hex = digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if digest.len() != Self::LENGTH || !lower_hex {
            return Err(DomainError::InvalidPasswordHash);
        }

        Ok(Self(digest))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("digest", &"[REDACTED]")
            .finish()
    }
}
