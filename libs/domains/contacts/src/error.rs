use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Contact not found: {0}")]
    NotFound(Uuid),

    #[error("Contact with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ContactResult<T> = Result<T, ContactError>;

/// Convert ContactError to AppError for standardized error responses
impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::NotFound(id) => AppError::NotFound(format!("Contact {} not found", id)),
            ContactError::DuplicateEmail(email) => {
                AppError::Conflict(format!("Contact with email '{}' already exists", email))
            }
            ContactError::Validation(msg) => AppError::BadRequest(msg),
            ContactError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
