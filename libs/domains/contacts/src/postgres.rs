use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};
use uuid::Uuid;

use crate::{
    entity,
    error::{ContactError, ContactResult},
    models::{Contact, CreateContact},
    repository::ContactRepository,
};

/// PostgreSQL implementation of ContactRepository using SeaORM
#[derive(Clone)]
pub struct PgContactRepository {
    db: DatabaseConnection,
}

impl PgContactRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, input: CreateContact) -> ContactResult<Contact> {
        let contact = Contact::new(input);
        let active_model: entity::ActiveModel = contact.clone().into();

        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    ContactError::DuplicateEmail(contact.email.clone())
                }
                _ => ContactError::Internal(format!("Database error: {}", e)),
            })?;

        tracing::info!(contact_id = %model.id, "Created contact");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ContactResult<Option<Contact>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ContactError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn get_by_email(&self, email: &str) -> ContactResult<Option<Contact>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| ContactError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }
}
