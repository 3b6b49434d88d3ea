use crate::models::CaseStatus;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the service_cases table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_cases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub report_id: Uuid,
    pub user_id: Uuid,
    pub locality: String,
    pub category: String,
    pub status: CaseStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain ServiceCase
impl From<Model> for crate::models::ServiceCase {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            report_id: model.report_id,
            user_id: model.user_id,
            locality: model.locality,
            category: model.category,
            status: model.status,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain ServiceCase to Sea-ORM ActiveModel
impl From<crate::models::ServiceCase> for ActiveModel {
    fn from(case: crate::models::ServiceCase) -> Self {
        ActiveModel {
            id: Set(case.id),
            report_id: Set(case.report_id),
            user_id: Set(case.user_id),
            locality: Set(case.locality),
            category: Set(case.category),
            status: Set(case.status),
            created_at: Set(case.created_at.into()),
            updated_at: Set(case.updated_at.into()),
        }
    }
}
