//! PostgreSQL connection management built on SeaORM.

use core_config::{env_or_default, env_required, ConfigError, FromEnv};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::info;

use crate::retry::{retry, retry_with_backoff, RetryConfig};

/// PostgreSQL connection pool configuration
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database connection URL (required)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections in the pool
    pub min_connections: u32,
    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            acquire_timeout_secs: 8,
        }
    }

    /// Convert into SeaORM connect options
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(60))
            .sqlx_logging(true);
        opt
    }
}

impl FromEnv for PostgresConfig {
    /// Reads from environment variables:
    /// - DATABASE_URL: required
    /// - DATABASE_MAX_CONNECTIONS: defaults to 20
    /// - DATABASE_MIN_CONNECTIONS: defaults to 2
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("DATABASE_URL")?;
        let max_connections = parse_env("DATABASE_MAX_CONNECTIONS", "20")?;
        let min_connections = parse_env("DATABASE_MIN_CONNECTIONS", "2")?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs: 8,
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

/// Connect to PostgreSQL with the given pool configuration.
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.into_connect_options()).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect with automatic retry on failure.
///
/// Uses exponential backoff to ride out transient network issues during
/// startup (e.g. the database container still coming up).
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    match retry_config {
        Some(rc) => retry_with_backoff(|| connect_from_config(config.clone()), rc).await,
        None => retry(|| connect_from_config(config.clone())).await,
    }
}

/// Apply all pending migrations for the given migrator.
pub async fn run_migrations<M: MigratorTrait>(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("Applying database migrations");
    M::up(db, None).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Cheap connectivity check used by readiness probes.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_config_requires_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = PostgresConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_postgres_config_pool_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/civic")),
                ("DATABASE_MAX_CONNECTIONS", None),
                ("DATABASE_MIN_CONNECTIONS", None),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.max_connections, 20);
                assert_eq!(config.min_connections, 2);
            },
        );
    }

    #[test]
    fn test_postgres_config_invalid_pool_size() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/civic")),
                ("DATABASE_MAX_CONNECTIONS", Some("lots")),
            ],
            || {
                let err = PostgresConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));
            },
        );
    }
}
