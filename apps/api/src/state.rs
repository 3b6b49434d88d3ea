//! Application state management.
//!
//! The shared state passed to the per-context router constructors. Cloned
//! per handler (inexpensive Arc clones).

use axum_helpers::JwtAuth;
use domain_notifications::EventPublisher;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
    /// Stateless JWT issuing/verification
    pub jwt: JwtAuth,
    /// Broker-backed event publisher shared by every context
    pub publisher: Arc<dyn EventPublisher>,
}
