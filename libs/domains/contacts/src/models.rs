use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Contact lifecycle status
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "contact_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactStatus {
    /// Known to the system but not yet a credentialed user
    #[default]
    #[sea_orm(string_value = "lead")]
    Lead,
    /// Converted into a user by the registration workflow
    #[sea_orm(string_value = "registered")]
    Registered,
}

/// Contact entity - matches SQL schema
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    /// Unique identifier
    pub id: Uuid,
    /// Contact email (unique)
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Lifecycle status
    pub status: ContactStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new lead contact
    pub fn new(input: CreateContact) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            email: input.email,
            phone: input.phone,
            status: ContactStatus::Lead,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_lead(&self) -> bool {
        self.status == ContactStatus::Lead
    }
}

/// DTO for contact intake
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContact {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 5, max = 32))]
    pub phone: String,
}
