use axum::Router;
use axum_helpers::jwt_auth_middleware;
use domain_cases::{handlers, CaseService, PgCaseRepository};
use domain_notifications::EventMessageProvider;
use domain_reports::PgReportRepository;
use domain_users::PgUserRepository;
use std::sync::Arc;

pub fn router(state: &crate::AppState) -> Router {
    let repository = PgCaseRepository::new(state.db.clone());
    let reports = Arc::new(PgReportRepository::new(state.db.clone()));
    let users = Arc::new(PgUserRepository::new(state.db.clone()));

    let service = CaseService::new(
        repository,
        reports,
        users,
        EventMessageProvider::new(),
        state.publisher.clone(),
    );

    handlers::router(service).layer(axum::middleware::from_fn_with_state(
        state.jwt.clone(),
        jwt_auth_middleware,
    ))
}
