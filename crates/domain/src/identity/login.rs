//! Login logic management.

use std::fmt;

use crate::error::{DomainError, Result};

/// Value object of an account login, such as `joao.tavora2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    /// Converts a [`String`] into a valid [`Login`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is empty, not ascii, or contains an
    /// uppercase letter or a space.
    pub fn parse(login: impl Into<String>) -> Result<Self> {
        let login = login.into();

        if login.is_empty()
            || !login.is_ascii()
            || login.chars().any(|c| c.is_ascii_uppercase() || c == ' ')
        {
            return Err(DomainError::InvalidLogin);
        }

        Ok(Self(login))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered proposals of logins for a tokenized name.
///
/// For tokens `[t0, t1, .., tn]` it yields `t0.t1` up to `t0.tn`, then
/// `t0.tn1`, `t0.tn2` and so on. Ask the name for a new sequence to
/// start over.
#[derive(Debug, Clone)]
pub struct LoginCandidates {
    tokens: Vec<String>,
    position: usize,
    suffix: u64,
}

impl LoginCandidates {
    /// Create a sequence from lowercase ascii tokens.
    ///
    /// Returns `None` if there is no second token to pair the first one
    /// with.
    pub(crate) fn new(tokens: Vec<String>) -> Option<Self> {
        if tokens.len() < 2 {
            return None;
        }

        Some(Self {
            tokens,
            position: 1,
            suffix: 0,
        })
    }
}

impl Iterator for LoginCandidates {
    type Item = Login;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.tokens.first()?;

        if let Some(token) = self.tokens.get(self.position) {
            self.position += 1;
            return Some(Login(format!("{first}.{token}")));
        }

        let last = self.tokens.last()?;
        self.suffix = self.suffix.checked_add(1)?;

        Some(Login(format!("{first}.{last}{}", self.suffix)))
    }
}
