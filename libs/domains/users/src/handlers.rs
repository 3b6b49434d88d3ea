use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{UserResponse, VerifyRequest};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<U: UserRepository + 'static>(service: UserService<U>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/{username}", get(find_by_username))
        .route("/verify/{id}", post(verify_user))
        .with_state(shared_service)
}

/// Get a user by username
///
/// GET /users/:username
async fn find_by_username<U: UserRepository>(
    State(service): State<Arc<UserService<U>>>,
    Path(username): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service.find_by_username(&username).await?;
    Ok(Json(user))
}

/// Verify a user account with the registration temp token
///
/// POST /users/verify/:id
async fn verify_user<U: UserRepository>(
    State(service): State<Arc<UserService<U>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<VerifyRequest>,
) -> UserResult<Json<UserResponse>> {
    let user = service.verify_user(id, &input.token).await?;
    Ok(Json(user))
}
