use axum_helpers::JwtConfig;
use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// NATS broker configuration
#[derive(Clone, Debug)]
pub struct NatsConfig {
    pub url: String,
}

impl FromEnv for NatsConfig {
    /// Reads from environment variables:
    /// - NATS_URL: defaults to nats://127.0.0.1:4222
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("NATS_URL", "nats://127.0.0.1:4222"),
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the core libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub nats: NatsConfig,
    pub jwt: JwtConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let nats = NatsConfig::from_env()?;
        let jwt = JwtConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            database,
            nats,
            jwt,
            server,
            environment,
        })
    }
}
