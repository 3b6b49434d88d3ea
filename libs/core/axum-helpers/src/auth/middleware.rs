use super::jwt::{JwtAuth, PURPOSE_ACCESS};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Extract a bearer token from the Authorization header
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// JWT authentication middleware.
///
/// Validates the bearer token's signature and expiry, and requires the
/// ACCESS purpose (temp tokens are rejected here). Inserts `JwtClaims`
/// into request extensions on success.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum_helpers::{JwtAuth, jwt_auth_middleware};
///
/// let protected = Router::new()
///     .route("/reports", post(create_report))
///     .layer(axum::middleware::from_fn_with_state(
///         jwt_auth.clone(),
///         jwt_auth_middleware,
///     ));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    let token = match extract_token_from_request(&headers) {
        Some(t) => t,
        None => {
            tracing::debug!("No bearer token in Authorization header");
            return Err((StatusCode::UNAUTHORIZED, "No token provided"));
        }
    };

    let claims = match auth.verify_token(&token) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("JWT verification failed: {}", e);
            return Err((StatusCode::UNAUTHORIZED, "Invalid token"));
        }
    };

    if claims.purpose != PURPOSE_ACCESS {
        tracing::debug!(purpose = %claims.purpose, "Non-access token used on protected route");
        return Err((StatusCode::UNAUTHORIZED, "Invalid token"));
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
