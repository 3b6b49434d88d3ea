//! Handler tests for the Reports domain
//!
//! These tests drive the reports router behind the real JWT middleware and
//! verify authentication, request decoding, and status codes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use axum_helpers::{jwt_auth_middleware, JwtAuth, JwtConfig};
use domain_contacts::{Contact, CreateContact};
use domain_notifications::{EventMessageProvider, InMemoryEventPublisher};
use domain_reports::*;
use domain_users::{InMemoryUserRepository, User, UserAddress, UserRepository, UserRole};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

struct Harness {
    app: Router,
    auth: JwtAuth,
    user: User,
}

async fn harness() -> Harness {
    let auth = JwtAuth::new(&JwtConfig::new("reports-test-secret"));

    let users = InMemoryUserRepository::new();
    let contact = Contact::new(CreateContact {
        email: "ana@example.com".to_string(),
        phone: "+34600111222".to_string(),
    });
    let user = users
        .create(User::new(
            "ana".to_string(),
            "hash".to_string(),
            &contact,
            UserRole::Citizen,
            UserAddress::new("Springfield", "Evergreen Terrace 742"),
        ))
        .await
        .unwrap();

    let service = ReportService::new(
        InMemoryReportRepository::new(),
        Arc::new(users),
        EventMessageProvider::new(),
        Arc::new(InMemoryEventPublisher::new()),
    );

    let app = handlers::router(service).layer(axum::middleware::from_fn_with_state(
        auth.clone(),
        jwt_auth_middleware,
    ));

    Harness { app, auth, user }
}

fn bearer(auth: &JwtAuth, user: &User) -> String {
    let token = auth
        .create_access_token(&user.id.to_string(), &user.role.to_string())
        .unwrap();
    format!("Bearer {}", token)
}

fn create_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }

    builder
        .body(Body::from(
            serde_json::to_string(&json!({
                "locality": "Springfield",
                "description": "Broken streetlight on Main St"
            }))
            .unwrap(),
        ))
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_report_requires_token() {
    let h = harness().await;

    let response = h.app.oneshot(create_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_report_rejects_garbage_token() {
    let h = harness().await;

    let response = h
        .app
        .oneshot(create_request(Some("Bearer garbage")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_report_returns_201() {
    let h = harness().await;
    let token = bearer(&h.auth, &h.user);

    let response = h.app.oneshot(create_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["locality"], "Springfield");
    assert_eq!(body["status"], "received");
    assert_eq!(body["user_id"], h.user.id.to_string());
}

#[tokio::test]
async fn test_create_report_validates_description() {
    let h = harness().await;
    let token = bearer(&h.auth, &h.user);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .header("authorization", &token)
        .body(Body::from(
            serde_json::to_string(&json!({
                "locality": "Springfield",
                "description": ""
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = h.app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_by_locality_round_trip() {
    let h = harness().await;
    let token = bearer(&h.auth, &h.user);

    h.app
        .clone()
        .oneshot(create_request(Some(&token)))
        .await
        .unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/locality/Springfield")
        .header("authorization", &token)
        .body(Body::empty())
        .unwrap();

    let response = h.app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_status_of_unknown_report_returns_404() {
    let h = harness().await;
    let token = bearer(&h.auth, &h.user);

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/{}/status", uuid::Uuid::new_v4()))
        .header("content-type", "application/json")
        .header("authorization", &token)
        .body(Body::from(
            serde_json::to_string(&json!({ "status": "resolved" })).unwrap(),
        ))
        .unwrap();

    let response = h.app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
