use std::{fmt, str::FromStr};

use crate::error::pagination::PaginationError;

/// Which page a navigation call loads relative to the current cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Current,
    Next,
}

impl PageDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Current => "current",
            Self::Next => "next",
        }
    }
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageDirection {
    type Err = PaginationError;

    /// Parses `"previous"`, `"current"` or `"next"`; anything else is an invalid argument.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "previous" => Ok(Self::Previous),
            "current" => Ok(Self::Current),
            "next" => Ok(Self::Next),
            other => Err(PaginationError::InvalidArgument(format!(
                "Unknown page direction '{}', expected one of previous, current or next",
                other
            ))),
        }
    }
}
