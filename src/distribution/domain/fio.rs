//! Validated employee full name type.

use super::DistributionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a full name, matching the `VARCHAR(255)` column.
const MAX_FULL_NAME_LENGTH: usize = 255;

/// Validated employee full name (`fio`).
///
/// Employees are listed and sorted by this field, so it is the one scalar
/// whose shape the storage schema constrains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Creates a validated full name.
    ///
    /// The input is trimmed; interior whitespace and case are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionDomainError::EmptyFullName`] when the value is
    /// empty after trimming, or [`DistributionDomainError::FullNameTooLong`]
    /// when it exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DistributionDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(DistributionDomainError::EmptyFullName);
        }

        if normalized.chars().count() > MAX_FULL_NAME_LENGTH {
            return Err(DistributionDomainError::FullNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the full name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
