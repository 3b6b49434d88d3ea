use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use axum_helpers::{JwtClaims, ValidatedJson};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ReportError, ReportResult};
use crate::models::{CreateReport, Report, UpdateReportDescription, UpdateReportStatus};
use crate::repository::ReportRepository;
use crate::service::ReportService;

/// Create the reports router with all HTTP endpoints.
///
/// The app router wraps this in the JWT middleware; `create_report` reads
/// the authenticated user from the claims it inserts.
pub fn router<R: ReportRepository + 'static>(service: ReportService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_report))
        .route("/locality/{locality}", get(find_by_locality))
        .route("/user/{user_id}", get(find_by_user))
        .route("/{id}/status", patch(update_status))
        .route("/{id}/description", patch(update_description))
        .with_state(shared_service)
}

/// Create a new report for the authenticated user
///
/// POST /reports
async fn create_report<R: ReportRepository>(
    State(service): State<Arc<ReportService<R>>>,
    Extension(claims): Extension<JwtClaims>,
    ValidatedJson(input): ValidatedJson<CreateReport>,
) -> ReportResult<impl IntoResponse> {
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ReportError::Unauthorized)?;

    let report = service.create_report(user_id, input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// List reports for a locality
///
/// GET /reports/locality/:locality
async fn find_by_locality<R: ReportRepository>(
    State(service): State<Arc<ReportService<R>>>,
    Path(locality): Path<String>,
) -> ReportResult<Json<Vec<Report>>> {
    let reports = service.find_by_locality(&locality).await?;
    Ok(Json(reports))
}

/// List reports created by a user
///
/// GET /reports/user/:user_id
async fn find_by_user<R: ReportRepository>(
    State(service): State<Arc<ReportService<R>>>,
    Path(user_id): Path<Uuid>,
) -> ReportResult<Json<Vec<Report>>> {
    let reports = service.find_by_user(user_id).await?;
    Ok(Json(reports))
}

/// Update a report's status
///
/// PATCH /reports/:id/status
async fn update_status<R: ReportRepository>(
    State(service): State<Arc<ReportService<R>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateReportStatus>,
) -> ReportResult<Json<Report>> {
    let report = service.update_status(id, input.status).await?;
    Ok(Json(report))
}

/// Update a report's description
///
/// PATCH /reports/:id/description
async fn update_description<R: ReportRepository>(
    State(service): State<Arc<ReportService<R>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateReportDescription>,
) -> ReportResult<Json<Report>> {
    let report = service.update_description(id, input.description).await?;
    Ok(Json(report))
}
