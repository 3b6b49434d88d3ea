//! JWT authentication.
//!
//! Stateless HS256 tokens: short-lived access tokens for protected routes
//! and single-purpose temp tokens driving follow-up verification steps.

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims, ACCESS_TOKEN_TTL, PURPOSE_ACCESS};
pub use middleware::jwt_auth_middleware;
