use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, TokenResponse};
use crate::repository::UserRepository;
use crate::service::AuthService;
use domain_contacts::repository::ContactRepository;

/// Create the auth router with registration and login endpoints
pub fn router<U, C>(service: AuthService<U, C>) -> Router
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(shared_service)
}

/// Register a lead contact as a user
///
/// POST /auth/register
async fn register<U, C>(
    State(service): State<Arc<AuthService<U, C>>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<impl IntoResponse>
where
    U: UserRepository,
    C: ContactRepository,
{
    let token = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// User login
///
/// POST /auth/login
async fn login<U, C>(
    State(service): State<Arc<AuthService<U, C>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<LoginResponse>>
where
    U: UserRepository,
    C: ContactRepository,
{
    let response = service.login(input).await?;
    Ok(Json(response))
}
