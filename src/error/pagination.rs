use thiserror::Error;

/// Which end of the result set a navigation call ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBoundary {
    /// `previous` was called on the first page.
    First,
    /// `next` was called on the last page.
    Last,
}

impl std::fmt::Display for PageBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "Already on the first page, there is no previous page"),
            Self::Last => write!(f, "Already on the last page, there is no next page"),
        }
    }
}

/// Failures of keyset pagination.
///
/// Every variant is returned before any cursor field is modified, so a failed call leaves
/// the paginator exactly as it was.
#[derive(Error, Debug)]
pub enum PaginationError {
    /// The sort specification has no entry for the identity column.
    ///
    /// Raised before any storage call is issued.
    #[error("No order specified for identity column '{column}'")]
    Configuration {
        /// Name of the identity column that is missing from the sort specification
        column: String,
    },

    /// Navigation would move before the first page or past the last page.
    #[error("{0}")]
    Boundary(PageBoundary),

    /// Error propagated verbatim from the row source.
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),

    /// Unrecognized navigation direction or sort direction string.
    #[error("{0}")]
    InvalidArgument(String),
}
