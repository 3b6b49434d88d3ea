//! Service-Cases Domain
//!
//! Municipal service cases opened from citizen reports and tracked to
//! resolution. Status changes notify the citizen who filed the underlying
//! report, fire-and-forget.
//!
//! Follows the same layering as the other bounded contexts: handlers →
//! service → repository → models.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CaseError, CaseResult};
pub use models::{CaseStatus, OpenCase, ServiceCase, UpdateCaseStatus};
pub use postgres::PgCaseRepository;
pub use repository::{CaseRepository, InMemoryCaseRepository};
pub use service::CaseService;
