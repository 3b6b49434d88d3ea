use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Report handling status
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "report_status")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportStatus {
    /// Submitted and awaiting triage
    #[default]
    #[sea_orm(string_value = "received")]
    Received,
    /// Being handled by municipal staff
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Fixed or answered
    #[sea_orm(string_value = "resolved")]
    Resolved,
    /// Declined (duplicate, out of jurisdiction, ...)
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Report entity - matches SQL schema
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Report {
    /// Unique identifier
    pub id: Uuid,
    /// Reporting user
    pub user_id: Uuid,
    /// Locality the incident belongs to
    pub locality: String,
    /// Free-text incident description
    pub description: String,
    /// Handling status
    pub status: ReportStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Create a new report in the Received state
    pub fn new(user_id: Uuid, input: CreateReport) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            locality: input.locality,
            description: input.description,
            status: ReportStatus::Received,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a new report (the reporter comes from the JWT)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReport {
    #[validate(length(min = 1, max = 100))]
    pub locality: String,
    #[validate(length(min = 1, max = 4000))]
    pub description: String,
}

/// DTO for updating a report's status
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateReportStatus {
    pub status: ReportStatus,
}

/// DTO for updating a report's description
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateReportDescription {
    #[validate(length(min = 1, max = 4000))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_starts_received() {
        let report = Report::new(
            Uuid::new_v4(),
            CreateReport {
                locality: "Springfield".to_string(),
                description: "Broken streetlight on Main St".to_string(),
            },
        );

        assert_eq!(report.status, ReportStatus::Received);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(ReportStatus::Resolved.to_string(), "resolved");
    }
}
