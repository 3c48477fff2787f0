//! Error types for the clinic records crate.
//!
//! `AppError` is the top-level error returned by startup code and the binary. It wraps the
//! domain-specific errors so callers can use `?` across layers. Repository methods return
//! `sea_orm::DbErr` directly and pagination returns `PaginationError`.

pub mod config;
pub mod pagination;

use thiserror::Error;

use crate::error::{config::ConfigError, pagination::PaginationError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Pagination failure: misconfigured sort, boundary, storage or bad direction.
    #[error(transparent)]
    PaginationErr(#[from] PaginationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure to serialize rows for output.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Failure to install the tracing subscriber.
    #[error("Failed to initialize logging: {0}")]
    LoggingErr(String),
}
