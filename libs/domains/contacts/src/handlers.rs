use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ContactResult;
use crate::models::{Contact, CreateContact};
use crate::repository::ContactRepository;
use crate::service::ContactService;

/// Create the contacts router with all HTTP endpoints
pub fn router<R: ContactRepository + 'static>(service: ContactService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_contact))
        .route("/{id}", get(get_contact))
        .with_state(shared_service)
}

/// Contact intake
///
/// POST /contacts
async fn create_contact<R: ContactRepository>(
    State(service): State<Arc<ContactService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateContact>,
) -> ContactResult<impl IntoResponse> {
    let contact = service.create_contact(input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// Get a contact by ID
///
/// GET /contacts/:id
async fn get_contact<R: ContactRepository>(
    State(service): State<Arc<ContactService<R>>>,
    Path(id): Path<Uuid>,
) -> ContactResult<Json<Contact>> {
    let contact = service.get_contact(id).await?;
    Ok(Json(contact))
}
