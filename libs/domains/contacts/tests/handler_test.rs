//! Handler tests for the Contacts domain
//!
//! These tests drive the domain router directly (no full app, no auth
//! middleware) and verify request decoding, status codes, and error
//! responses.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_contacts::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> axum::Router {
    let service = ContactService::new(InMemoryContactRepository::new());
    handlers::router(service)
}

fn intake_request(email: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "phone": "+34600111222"
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_create_contact_returns_201() {
    let app = app();

    let response = app.oneshot(intake_request("ana@example.com")).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let contact: Contact = json_body(response.into_body()).await;
    assert_eq!(contact.email, "ana@example.com");
    assert_eq!(contact.status, ContactStatus::Lead);
}

#[tokio::test]
async fn test_create_contact_validates_email() {
    let app = app();

    let response = app
        .oneshot(intake_request("not-an-email"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_intake_returns_409() {
    let service = ContactService::new(InMemoryContactRepository::new());
    service
        .create_contact(CreateContact {
            email: "ana@example.com".to_string(),
            phone: "+34600111222".to_string(),
        })
        .await
        .unwrap();

    let app = handlers::router(service);
    let response = app.oneshot(intake_request("ana@example.com")).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_unknown_contact_returns_404() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
