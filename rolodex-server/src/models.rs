//! Domain types - the `Account` entity and path-parameter validation

use std::fmt;

/// The sole domain entity: a name/email pair.
///
/// The store assigns a surrogate integer id on insert; it is used only
/// for ordering and never exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Account {
    pub name: String,
    pub email: String,
}

/// Validation error for domain models
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// String doesn't match the required shape
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

/// A name that is safe to use as a `/reader/{name}` path segment.
///
/// Non-empty and ASCII alphanumeric only. The store itself accepts any
/// string (including empty), but names that travel through the URL are
/// held to the token shape the router matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidFormat {
                field: "name",
                reason: "must be ASCII letters and digits only",
            });
        }
        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
