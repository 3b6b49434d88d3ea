use axum::Router;
use domain_contacts::PgContactRepository;
use domain_notifications::EventMessageProvider;
use domain_users::{
    auth_handlers, Argon2HashService, AuthService, JwtTokenService, PgUserRepository, TokenService,
};
use std::sync::Arc;

pub fn router(state: &crate::AppState) -> Router {
    let users = PgUserRepository::new(state.db.clone());
    let contacts = PgContactRepository::new(state.db.clone());
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(state.jwt.clone()));

    let service = AuthService::new(
        users,
        contacts,
        Arc::new(Argon2HashService::new()),
        tokens,
        EventMessageProvider::new(),
        state.publisher.clone(),
    );

    auth_handlers::router(service)
}
