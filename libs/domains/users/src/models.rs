use chrono::{DateTime, Utc};
use domain_contacts::Contact;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User roles
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    /// Locality-scoped authority; at most one verified holder per locality
    #[sea_orm(string_value = "representative")]
    Representative,
    #[default]
    #[sea_orm(string_value = "citizen")]
    Citizen,
}

/// Postal address value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserAddress {
    pub locality: String,
    pub street: String,
}

impl UserAddress {
    pub fn new(locality: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            locality: locality.into(),
            street: street.into(),
        }
    }
}

/// User entity - matches SQL schema
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Username (unique system-wide)
    pub username: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The contact this user was registered from
    pub contact_id: Uuid,
    /// Email, copied from the contact at registration
    pub email: String,
    /// Phone, copied from the contact at registration
    pub phone: String,
    /// User role
    pub role: UserRole,
    /// Postal address
    pub address: UserAddress,
    /// Whether the account passed the verification workflow
    pub verified: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified user from a lead contact (password must
    /// already be hashed)
    pub fn new(
        username: String,
        password_hash: String,
        contact: &Contact,
        role: UserRole,
        address: UserAddress,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username,
            password_hash,
            contact_id: contact.id,
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            role,
            address,
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub contact_id: Uuid,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub address: UserAddress,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            contact_id: user.contact_id,
            email: user.email,
            phone: user.phone,
            role: user.role,
            address: user.address,
            verified: user.verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for registering a lead contact as a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Id of the lead contact being converted
    pub contact_id: String,
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    pub password: String,
    /// Raw role value, parsed by the registration workflow
    pub role: String,
    #[validate(length(min = 1, max = 100))]
    pub locality: String,
    #[validate(length(min = 1, max = 200))]
    pub street: String,
}

/// Response carrying an issued token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// DTO for user login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    pub password: String,
}

/// Response after successful login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

/// DTO for account verification
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VerifyRequest {
    #[validate(length(min = 1))]
    pub token: String,
}
