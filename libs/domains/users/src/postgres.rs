use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{User, UserRole},
    repository::UserRepository,
};

// Index names created by the users migration; used to tell the two
// uniqueness violations apart.
const USERNAME_INDEX: &str = "idx_users_username_unique";
const VERIFIED_REPRESENTATIVE_INDEX: &str = "idx_users_one_verified_representative";

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a constraint violation into the domain error it stands for.
fn translate_unique_violation(detail: &str, user: &User) -> UserError {
    if detail.contains(VERIFIED_REPRESENTATIVE_INDEX) {
        UserError::RepresentativeExists(user.address.locality.clone())
    } else if detail.contains(USERNAME_INDEX) || detail.contains("username") {
        UserError::UsernameTaken(user.username.clone())
    } else {
        UserError::Internal(format!("Unexpected constraint violation: {}", detail))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let active_model: entity::ActiveModel = user.clone().into();

        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    translate_unique_violation(&detail, &user)
                }
                _ => UserError::Internal(format!("Database error: {}", e)),
            })?;

        tracing::info!(user_id = %model.id, username = %model.username, "Created user");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list_by_role_and_locality(
        &self,
        role: UserRole,
        locality: &str,
    ) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Role.eq(role))
            .filter(entity::Column::Locality.eq(locality))
            .all(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn set_verified(&self, id: Uuid) -> UserResult<User> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        let user: User = model.clone().into();

        let mut active_model: entity::ActiveModel = model.into();
        active_model.verified = Set(true);
        active_model.updated_at = Set(chrono::Utc::now().into());

        // The partial unique index rejects a second verified
        // representative in the same locality.
        let updated = active_model.update(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    translate_unique_violation(&detail, &user)
                }
                _ => UserError::Internal(format!("Database error: {}", e)),
            }
        })?;

        tracing::info!(user_id = %id, "Marked user as verified");
        Ok(updated.into())
    }
}
