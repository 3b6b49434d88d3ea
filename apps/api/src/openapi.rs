use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

/// Civic platform API documentation
#[derive(OpenApi)]
#[openapi(
    components(schemas(
        axum_helpers::ErrorResponse,
        domain_contacts::Contact,
        domain_contacts::ContactStatus,
        domain_contacts::CreateContact,
        domain_users::LoginRequest,
        domain_users::LoginResponse,
        domain_users::RegisterRequest,
        domain_users::TokenResponse,
        domain_users::UserAddress,
        domain_users::UserResponse,
        domain_users::UserRole,
        domain_users::VerifyRequest,
        domain_reports::CreateReport,
        domain_reports::Report,
        domain_reports::ReportStatus,
        domain_reports::UpdateReportDescription,
        domain_reports::UpdateReportStatus,
        domain_cases::CaseStatus,
        domain_cases::OpenCase,
        domain_cases::ServiceCase,
        domain_cases::UpdateCaseStatus,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "contacts", description = "Contact intake"),
        (name = "users", description = "User lookup and verification"),
        (name = "reports", description = "Citizen incident reports"),
        (name = "cases", description = "Municipal service cases"),
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Serves the generated OpenAPI document as JSON.
pub fn router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
