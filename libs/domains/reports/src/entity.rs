use crate::models::ReportStatus;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the reports table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub locality: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: ReportStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Report
impl From<Model> for crate::models::Report {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            locality: model.locality,
            description: model.description,
            status: model.status,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain Report to Sea-ORM ActiveModel
impl From<crate::models::Report> for ActiveModel {
    fn from(report: crate::models::Report) -> Self {
        ActiveModel {
            id: Set(report.id),
            user_id: Set(report.user_id),
            locality: Set(report.locality),
            description: Set(report.description),
            status: Set(report.status),
            created_at: Set(report.created_at.into()),
            updated_at: Set(report.updated_at.into()),
        }
    }
}
