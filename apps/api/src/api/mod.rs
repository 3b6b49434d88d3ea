use axum::Router;

pub mod auth;
pub mod cases;
pub mod contacts;
pub mod health;
pub mod reports;
pub mod users;

/// Creates the API routes without the `/api` prefix.
///
/// Each bounded context constructs its repositories and service from the
/// shared state and returns a router with state already applied; only Arc
/// pointer clones are left by the time requests are served.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/auth", auth::router(state))
        .nest("/contacts", contacts::router(state))
        .nest("/users", users::router(state))
        .nest("/reports", reports::router(state))
        .nest("/cases", cases::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks against the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
