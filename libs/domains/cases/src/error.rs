use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_reports::ReportError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("Case not found: {0}")]
    NotFound(Uuid),

    #[error("Report not found: {0}")]
    ReportNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CaseResult<T> = Result<T, CaseError>;

// Report lookups happen while opening a case; anything beyond plain
// absence is an infrastructure failure from this context's point of view.
impl From<ReportError> for CaseError {
    fn from(err: ReportError) -> Self {
        CaseError::Internal(err.to_string())
    }
}

/// Convert CaseError to AppError for standardized error responses
impl From<CaseError> for AppError {
    fn from(err: CaseError) -> Self {
        match err {
            CaseError::NotFound(id) => AppError::NotFound(format!("Case {} not found", id)),
            CaseError::ReportNotFound(id) => {
                AppError::NotFound(format!("Report {} not found", id))
            }
            CaseError::Validation(msg) => AppError::BadRequest(msg),
            CaseError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CaseError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
