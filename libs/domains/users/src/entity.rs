use crate::models::{UserAddress, UserRole};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub contact_id: Uuid,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub locality: String,
    pub street: String,
    pub verified: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain User
impl From<Model> for crate::models::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            contact_id: model.contact_id,
            email: model.email,
            phone: model.phone,
            role: model.role,
            address: UserAddress::new(model.locality, model.street),
            verified: model.verified,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain User to Sea-ORM ActiveModel
impl From<crate::models::User> for ActiveModel {
    fn from(user: crate::models::User) -> Self {
        ActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            contact_id: Set(user.contact_id),
            email: Set(user.email),
            phone: Set(user.phone),
            role: Set(user.role),
            locality: Set(user.address.locality),
            street: Set(user.address.street),
            verified: Set(user.verified),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}
