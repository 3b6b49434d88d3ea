//! Database library providing PostgreSQL connection management via SeaORM.
//!
//! # Example
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let config = postgres::PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db).await?;
//! ```

pub mod postgres;
pub mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};
