//! Share slug value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Characters a slug may contain.
pub const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Shortest allowed slug.
pub const MIN_SLUG_LENGTH: usize = 8;

/// Longest allowed slug.
pub const MAX_SLUG_LENGTH: usize = 12;

/// Public identifier of a shared decision, e.g. `k3m9x2qa7b`.
///
/// # Invariants
///
/// - 8 to 12 characters
/// - only lower-case ASCII letters and digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShareSlug(String);

impl ShareSlug {
    /// Parses a slug, validating length and alphabet.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let length = value.len();
        if !(MIN_SLUG_LENGTH..=MAX_SLUG_LENGTH).contains(&length) {
            return Err(ValidationError::out_of_range(
                "share_slug",
                MIN_SLUG_LENGTH as i32,
                MAX_SLUG_LENGTH as i32,
                length as i32,
            ));
        }
        if !value.bytes().all(|b| SLUG_ALPHABET.contains(&b)) {
            return Err(ValidationError::invalid_format(
                "share_slug",
                "only a-z and 0-9 are allowed",
            ));
        }
        Ok(Self(value))
    }

    /// Wraps generator output that is already known to be valid.
    pub(super) fn from_generated(value: String) -> Self {
        Self(value)
    }

    /// Returns the slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShareSlug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShareSlug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ShareSlug> for String {
    fn from(slug: ShareSlug) -> Self {
        slug.0
    }
}
