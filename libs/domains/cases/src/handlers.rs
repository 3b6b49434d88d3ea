use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::CaseResult;
use crate::models::{OpenCase, ServiceCase, UpdateCaseStatus};
use crate::repository::CaseRepository;
use crate::service::CaseService;

/// Create the cases router with all HTTP endpoints.
///
/// The app router wraps this in the JWT middleware.
pub fn router<R: CaseRepository + 'static>(service: CaseService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(open_case))
        .route("/user/{user_id}", get(find_by_user))
        .route("/{id}", get(get_case))
        .route("/{id}/status", patch(update_status))
        .with_state(shared_service)
}

/// Open a case from a report
///
/// POST /cases
async fn open_case<R: CaseRepository>(
    State(service): State<Arc<CaseService<R>>>,
    ValidatedJson(input): ValidatedJson<OpenCase>,
) -> CaseResult<impl IntoResponse> {
    let case = service.open_case(input).await?;
    Ok((StatusCode::CREATED, Json(case)))
}

/// Get a case by ID
///
/// GET /cases/:id
async fn get_case<R: CaseRepository>(
    State(service): State<Arc<CaseService<R>>>,
    Path(id): Path<Uuid>,
) -> CaseResult<Json<ServiceCase>> {
    let case = service.get_case(id).await?;
    Ok(Json(case))
}

/// List cases for a user
///
/// GET /cases/user/:user_id
async fn find_by_user<R: CaseRepository>(
    State(service): State<Arc<CaseService<R>>>,
    Path(user_id): Path<Uuid>,
) -> CaseResult<Json<Vec<ServiceCase>>> {
    let cases = service.find_by_user(user_id).await?;
    Ok(Json(cases))
}

/// Update a case's status
///
/// PATCH /cases/:id/status
async fn update_status<R: CaseRepository>(
    State(service): State<Arc<CaseService<R>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateCaseStatus>,
) -> CaseResult<Json<ServiceCase>> {
    let case = service.update_status(id, input.status).await?;
    Ok(Json(case))
}
