use axum::Router;
use axum_helpers::jwt_auth_middleware;
use domain_notifications::EventMessageProvider;
use domain_reports::{handlers, PgReportRepository, ReportService};
use domain_users::PgUserRepository;
use std::sync::Arc;

pub fn router(state: &crate::AppState) -> Router {
    let repository = PgReportRepository::new(state.db.clone());
    let users = Arc::new(PgUserRepository::new(state.db.clone()));

    let service = ReportService::new(
        repository,
        users,
        EventMessageProvider::new(),
        state.publisher.clone(),
    );

    handlers::router(service).layer(axum::middleware::from_fn_with_state(
        state.jwt.clone(),
        jwt_auth_middleware,
    ))
}
