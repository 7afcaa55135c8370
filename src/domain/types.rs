//! Strongly-typed value objects used by domain entities.
//!
//! Entities carry these wrappers instead of raw strings so that identifier
//! formats are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

use crate::domain::value_object::ValueObject;

/// Length of the hyphenated textual form, e.g. `123e4567-e89b-12d3-a456-426614174000`.
const HYPHENATED_LEN: usize = 36;

/// Raised when a string is not a syntactically valid UUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ID must be a valid UUID")]
pub struct InvalidUuidError {
    value: String,
}

impl InvalidUuidError {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Universally unique identifier in its canonical hyphenated form.
///
/// The supplied text is kept verbatim, so an identifier built from `X` always
/// prints back as `X`. Any UUID version is accepted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid(String);

/// Identity of a [`crate::domain::category::Category`].
pub type CategoryId = Uuid;

impl Uuid {
    /// Validates `value` and wraps it.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, InvalidUuidError> {
        let value = value.into();
        if value.len() != HYPHENATED_LEN || uuid::Uuid::try_parse(&value).is_err() {
            return Err(InvalidUuidError::new(value));
        }
        Ok(Self(value))
    }

    /// Generates a fresh random (v4) identifier.
    pub fn create() -> Self {
        Self(uuid::Uuid::new_v4().hyphenated().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::create()
    }
}

impl ValueObject for Uuid {}

impl Display for Uuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Uuid {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Uuid {
    type Err = InvalidUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = InvalidUuidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = InvalidUuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

impl PartialEq<&str> for Uuid {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Uuid> for &str {
    fn eq(&self, other: &Uuid) -> bool {
        *self == other.as_str()
    }
}
