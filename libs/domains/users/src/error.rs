use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_contacts::ContactError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(Uuid),

    #[error("Contact {0} is already registered")]
    ContactAlreadyRegistered(Uuid),

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Unknown role: '{0}'")]
    InvalidRole(String),

    #[error("A verified representative already exists in {0}")]
    RepresentativeExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired verification token")]
    InvalidVerificationToken,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

// Contact lookups happen inside the registration workflow; anything the
// contacts repository reports beyond plain absence is an infrastructure
// failure from this context's point of view.
impl From<ContactError> for UserError {
    fn from(err: ContactError) -> Self {
        UserError::Internal(err.to_string())
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidIdentifier(raw) => {
                AppError::BadRequest(format!("Invalid identifier: '{}'", raw))
            }
            UserError::NotFound(who) => AppError::NotFound(format!("User {} not found", who)),
            UserError::ContactNotFound(id) => {
                AppError::NotFound(format!("Contact {} not found", id))
            }
            UserError::ContactAlreadyRegistered(id) => {
                AppError::Conflict(format!("Contact {} is already registered", id))
            }
            UserError::UsernameTaken(username) => {
                AppError::Conflict(format!("Username '{}' is already taken", username))
            }
            UserError::InvalidRole(raw) => AppError::BadRequest(format!("Unknown role: '{}'", raw)),
            UserError::RepresentativeExists(locality) => AppError::Conflict(format!(
                "A verified representative already exists in {}",
                locality
            )),
            UserError::InvalidCredentials => {
                AppError::Unauthorized("Invalid username or password".to_string())
            }
            UserError::InvalidVerificationToken => {
                AppError::BadRequest("Invalid or expired verification token".to_string())
            }
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::PasswordHash(msg) => AppError::InternalServerError(msg),
            UserError::Token(msg) => AppError::InternalServerError(msg),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (
                UserError::InvalidIdentifier("x".into()).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::ContactNotFound(Uuid::new_v4()).into_response(),
                StatusCode::NOT_FOUND,
            ),
            (
                UserError::ContactAlreadyRegistered(Uuid::new_v4()).into_response(),
                StatusCode::CONFLICT,
            ),
            (
                UserError::UsernameTaken("ana".into()).into_response(),
                StatusCode::CONFLICT,
            ),
            (
                UserError::InvalidRole("mayor".into()).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::RepresentativeExists("Springfield".into()).into_response(),
                StatusCode::CONFLICT,
            ),
            (
                UserError::Internal("boom".into()).into_response(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (response, expected) in cases {
            assert_eq!(response.status(), expected);
        }
    }
}
