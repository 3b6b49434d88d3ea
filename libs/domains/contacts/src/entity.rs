use crate::models::ContactStatus;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the contacts table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Contact
impl From<Model> for crate::models::Contact {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            phone: model.phone,
            status: model.status,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain Contact to Sea-ORM ActiveModel
impl From<crate::models::Contact> for ActiveModel {
    fn from(contact: crate::models::Contact) -> Self {
        ActiveModel {
            id: Set(contact.id),
            email: Set(contact.email),
            phone: Set(contact.phone),
            status: Set(contact.status),
            created_at: Set(contact.created_at.into()),
            updated_at: Set(contact.updated_at.into()),
        }
    }
}
