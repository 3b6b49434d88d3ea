use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Convert ReportError to AppError for standardized error responses
impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::NotFound(id) => AppError::NotFound(format!("Report {} not found", id)),
            ReportError::Validation(msg) => AppError::BadRequest(msg),
            ReportError::Unauthorized => AppError::Unauthorized("Authentication required".to_string()),
            ReportError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
