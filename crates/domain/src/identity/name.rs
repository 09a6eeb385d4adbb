//! Full name logic.

use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::error::{DomainError, Result};
use crate::identity::login::LoginCandidates;

/// Connective words that never count as part of a name.
const STOPWORDS: [&str; 5] = ["e", "de", "da", "dos", "das"];

/// Value object of a person's full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    /// Maximum name length, once trimmed.
    pub const MAX_LENGTH: usize = 120;
    /// Minimum name length, once trimmed.
    pub const MIN_LENGTH: usize = 5;

    /// Converts a [`String`] into a valid [`FullName`].
    ///
    /// The value is kept as supplied; trimming only applies to the
    /// length check.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the trimmed name is not between
    /// [`Self::MIN_LENGTH`] and [`Self::MAX_LENGTH`] characters, or if it
    /// has less than two significant tokens (see [`FullName::tokens`]).
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let len = name.trim().chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&len)
            || significant_tokens(&name).len() < 2
        {
            return Err(DomainError::InvalidFullName {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(name))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase ascii tokens of the name.
    ///
    /// Diacritics are stripped, the name is split on single spaces, and
    /// empty tokens and stopwords are dropped.
    pub fn tokens(&self) -> Vec<String> {
        significant_tokens(&self.0)
    }

    /// Lazy sequence of logins this name can be given.
    ///
    /// Returns `None` when the name has less than two tokens, which a
    /// parsed [`FullName`] never has.
    pub fn login_candidates(&self) -> Option<LoginCandidates> {
        LoginCandidates::new(self.tokens())
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonical decomposition, then drop anything outside ascii.
fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(char::is_ascii).collect()
}

fn significant_tokens(name: &str) -> Vec<String> {
    strip_diacritics(name)
        .split(' ')
        .filter(|token| !token.is_empty())
        .filter(|token| {
            !STOPWORDS.iter().any(|word| token.eq_ignore_ascii_case(word))
        })
        .map(str::to_ascii_lowercase)
        .collect()
}
