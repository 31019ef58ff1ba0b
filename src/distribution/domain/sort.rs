//! Sort direction for employee listings.

use super::ParseSortDirectionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction applied when sorting employees by full name.
///
/// The wire representation is the two-valued `ASC`/`DESC` contract exposed
/// at the system boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending order by full name.
    Asc,
    /// Descending order by full name.
    Desc,
}

impl SortDirection {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = ParseSortDirectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(ParseSortDirectionError(value.to_owned())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
