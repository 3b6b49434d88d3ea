use axum::Router;
use domain_users::{handlers, JwtTokenService, PgUserRepository, TokenService, UserService};
use std::sync::Arc;

pub fn router(state: &crate::AppState) -> Router {
    let repository = PgUserRepository::new(state.db.clone());
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(state.jwt.clone()));

    let service = UserService::new(repository, tokens);
    handlers::router(service)
}
