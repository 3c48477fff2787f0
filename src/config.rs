use crate::{
    error::{config::ConfigError, AppError},
    pagination::cursor::DEFAULT_PAGE_SIZE,
};

const DEFAULT_LOG_FILTER: &str = "info";

pub struct Config {
    pub database_url: String,

    /// Rows per page used when a listing does not choose its own size.
    pub page_size: u64,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info,sea_orm=warn`.
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            page_size: page_size_or_default(std::env::var("PAGE_SIZE").ok().as_deref())?,
            log_filter: std::env::var("LOG_FILTER")
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

/// Unset `PAGE_SIZE` falls back to the paginator's default page size.
fn page_size_or_default(value: Option<&str>) -> Result<u64, ConfigError> {
    match value {
        Some(value) => parse_page_size(value),
        None => Ok(DEFAULT_PAGE_SIZE),
    }
}

fn parse_page_size(value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "PAGE_SIZE".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("page size must be greater than zero")),
        Ok(size) => Ok(size),
        Err(e) => Err(invalid(&e.to_string())),
    }
}
