//! Reports Domain
//!
//! Citizen incident reports: creation, locality/user queries, and status
//! tracking by municipal staff. New reports are handed to the text-mining
//! pipeline and acknowledged to the reporter over their preferred channel,
//! both fire-and-forget.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (JWT protected by the app router)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic + event hand-off
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
pub use error::{ReportError, ReportResult};
pub use models::{
    CreateReport, Report, ReportStatus, UpdateReportDescription, UpdateReportStatus,
};
pub use postgres::PgReportRepository;
pub use repository::{InMemoryReportRepository, ReportRepository};
pub use service::ReportService;
