use chrono::{DateTime, Utc};
use domain_reports::Report;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Case handling status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "case_status")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// Service case entity - matches SQL schema
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceCase {
    /// Unique identifier
    pub id: Uuid,
    /// The report this case was opened from
    pub report_id: Uuid,
    /// The citizen who filed the report
    pub user_id: Uuid,
    /// Locality, copied from the report
    pub locality: String,
    /// Municipal service category (roads, lighting, waste, ...)
    pub category: String,
    /// Handling status
    pub status: CaseStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ServiceCase {
    /// Open a new case from an existing report
    pub fn new(report: &Report, category: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            report_id: report.id,
            user_id: report.user_id,
            locality: report.locality.clone(),
            category,
            status: CaseStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for opening a case from a report
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OpenCase {
    pub report_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
}

/// DTO for updating a case's status
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCaseStatus {
    pub status: CaseStatus,
}
