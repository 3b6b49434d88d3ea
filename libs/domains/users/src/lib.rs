//! Users Domain
//!
//! Users/auth context: converts lead contacts into credentialed users and
//! serves user lookups and account verification.
//!
//! # Features
//!
//! - Registration of lead contacts as users (the platform's only user
//!   creation path)
//! - Password hashing with Argon2 behind the [`HashService`] trait
//! - Temp-token issuing for the follow-up verification step
//! - One-verified-representative-per-locality enforcement
//! - Login with short-lived access tokens
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Registration workflow, credentials, verification
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! The service also collaborates with the contacts repository (lead
//! lookup) and the notifications publisher (verification message,
//! fire-and-forget).

pub mod auth_handlers;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod hashing;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod tokens;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use hashing::{Argon2HashService, HashService};
pub use models::{
    LoginRequest, LoginResponse, RegisterRequest, TokenResponse, User, UserAddress, UserResponse,
    UserRole, VerifyRequest,
};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::{AuthService, UserService};
pub use tokens::{JwtTokenService, TempTokenPayload, TokenService, PURPOSE_USER_VERIFICATION};
