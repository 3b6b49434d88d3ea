use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ReportError, ReportResult},
    models::{Report, ReportStatus},
    repository::ReportRepository,
};

/// PostgreSQL implementation of ReportRepository using SeaORM
#[derive(Clone)]
pub struct PgReportRepository {
    db: DatabaseConnection,
}

impl PgReportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> ReportResult<entity::Model> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ReportError::Internal(format!("Database error: {}", e)))?
            .ok_or(ReportError::NotFound(id))
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn create(&self, report: Report) -> ReportResult<Report> {
        let active_model: entity::ActiveModel = report.into();

        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| ReportError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(report_id = %model.id, locality = %model.locality, "Created report");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ReportResult<Option<Report>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ReportError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list_by_locality(&self, locality: &str) -> ReportResult<Vec<Report>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Locality.eq(locality))
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ReportError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn list_by_user(&self, user_id: Uuid) -> ReportResult<Vec<Report>> {
        let models = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ReportError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update_status(&self, id: Uuid, status: ReportStatus) -> ReportResult<Report> {
        let mut active_model: entity::ActiveModel = self.find_model(id).await?.into();
        active_model.status = Set(status);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| ReportError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(report_id = %id, status = %status, "Updated report status");
        Ok(updated.into())
    }

    async fn update_description(&self, id: Uuid, description: String) -> ReportResult<Report> {
        let mut active_model: entity::ActiveModel = self.find_model(id).await?.into();
        active_model.description = Set(description);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| ReportError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(report_id = %id, "Updated report description");
        Ok(updated.into())
    }
}
