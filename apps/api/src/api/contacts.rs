use axum::Router;
use domain_contacts::{handlers, ContactService, PgContactRepository};

pub fn router(state: &crate::AppState) -> Router {
    let repository = PgContactRepository::new(state.db.clone());
    let service = ContactService::new(repository);
    handlers::router(service)
}
