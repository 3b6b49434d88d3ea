//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by every HTTP surface in the
//! workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT issuing, verification, and route-guard middleware
//! - **[`errors`]**: Structured error responses
//! - **[`extractors`]**: Custom extractors (validated JSON)
//! - **[`server`]**: Server setup, health endpoint, graceful shutdown

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export auth types
pub use auth::{
    jwt_auth_middleware, JwtAuth, JwtClaims, JwtConfig, ACCESS_TOKEN_TTL, PURPOSE_ACCESS,
};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export server types
pub use server::{create_app, health_router, shutdown_signal, HealthResponse};
