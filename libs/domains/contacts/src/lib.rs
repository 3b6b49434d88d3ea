//! Contacts Domain
//!
//! Contact intake for the platform: people known to the system before they
//! become credentialed users. A contact enters as a lead; the users/auth
//! context reads it during registration and a separate verification
//! workflow moves it along its lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Intake rules
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

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ContactError, ContactResult};
pub use models::{Contact, ContactStatus, CreateContact};
pub use postgres::PgContactRepository;
pub use repository::{ContactRepository, InMemoryContactRepository};
pub use service::ContactService;
