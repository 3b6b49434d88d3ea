use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{CaseError, CaseResult},
    models::{CaseStatus, ServiceCase},
    repository::CaseRepository,
};

/// PostgreSQL implementation of CaseRepository using SeaORM
#[derive(Clone)]
pub struct PgCaseRepository {
    db: DatabaseConnection,
}

impl PgCaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CaseRepository for PgCaseRepository {
    async fn create(&self, case: ServiceCase) -> CaseResult<ServiceCase> {
        let active_model: entity::ActiveModel = case.into();

        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| CaseError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(case_id = %model.id, report_id = %model.report_id, "Opened case");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CaseResult<Option<ServiceCase>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CaseError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list_by_user(&self, user_id: Uuid) -> CaseResult<Vec<ServiceCase>> {
        let models = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CaseError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update_status(&self, id: Uuid, status: CaseStatus) -> CaseResult<ServiceCase> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CaseError::Internal(format!("Database error: {}", e)))?
            .ok_or(CaseError::NotFound(id))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.status = Set(status);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| CaseError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(case_id = %id, status = %status, "Updated case status");
        Ok(updated.into())
    }
}
