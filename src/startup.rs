use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Connects to the database named by the configuration.
///
/// Establishes a SeaORM connection pool using the connection string from configuration.
/// SQLx statement logging is disabled; page queries are logged by the paginator instead.
/// The schema is expected to exist already.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database
/// - `Err(AppError::DbErr)` - Failed to connect to database
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Installs the global `tracing` subscriber.
///
/// Uses the configured filter directive, falling back to `info` when the directive cannot
/// be parsed.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LoggingErr)` - A global subscriber was already set
pub fn init_tracing(config: &Config) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::LoggingErr(e.to_string()))
}
