use assetdesk_core::ActorIdentity;
use assetdesk_domain::Role;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::build_router;
use crate::test_support::{memory_state, seed_actor};

const FRONTEND_URL: &str = "http://localhost:3000";

struct TestApp {
    router: Router,
    user: ActorIdentity,
    admin: ActorIdentity,
}

async fn test_app() -> TestApp {
    let state = memory_state();
    let user = seed_actor(&state, "user@assetdesk.test", &[Role::User]).await;
    let admin = seed_actor(&state, "admin@assetdesk.test", &[Role::Admin]).await;
    let router = match build_router(state, FRONTEND_URL) {
        Ok(router) => router,
        Err(error) => panic!("failed to build router: {error}"),
    };

    TestApp {
        router,
        user,
        admin,
    }
}

fn request(
    method: Method,
    uri: &str,
    actor: Option<&ActorIdentity>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        builder = builder.header("x-actor-id", actor.actor_id().to_string());
    }
    let body = match body {
        Some(body) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    match builder.body(body) {
        Ok(request) => request,
        Err(error) => panic!("failed to build request: {error}"),
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = match app.router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(error) => panic!("router failed: {error}"),
    };
    let status = response.status();
    let bytes = match to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => panic!("failed to read body: {error}"),
    };
    if bytes.is_empty() {
        return (status, Value::Null);
    }

    match serde_json::from_slice(&bytes) {
        Ok(body) => (status, body),
        Err(error) => panic!("body is not json: {error}"),
    }
}

async fn submit_dana(app: &TestApp) -> String {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/api/access-requests",
            None,
            Some(json!({
                "name": "Dana Whitfield",
                "email": "dana@example.com",
                "description": "Needs the asset register",
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "PENDING");

    match body["request_id"].as_str() {
        Some(request_id) => request_id.to_owned(),
        None => panic!("submission response lacks request_id: {body}"),
    }
}

#[tokio::test]
async fn health_is_public_and_names_storage() {
    let app = test_app().await;

    let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn submission_is_public_but_listing_requires_admin() {
    let app = test_app().await;
    let request_id = submit_dana(&app).await;

    let (anonymous, body) = send(
        &app,
        request(Method::GET, "/api/access-requests", None, None),
    )
    .await;
    assert_eq!(anonymous, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "unauthorized");

    let (user, body) = send(
        &app,
        request(Method::GET, "/api/access-requests", Some(&app.user), None),
    )
    .await;
    assert_eq!(user, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "forbidden");

    let (admin, body) = send(
        &app,
        request(Method::GET, "/api/access-requests", Some(&app.admin), None),
    )
    .await;
    assert_eq!(admin, StatusCode::OK);
    let listed = body
        .as_array()
        .map(|requests| {
            requests
                .iter()
                .any(|entry| entry["request_id"] == request_id.as_str())
        })
        .unwrap_or(false);
    assert!(listed);
}

#[tokio::test]
async fn unknown_actor_header_is_unauthorized() {
    let app = test_app().await;
    let stranger = memory_state();
    let outsider = seed_actor(&stranger, "outsider@assetdesk.test", &[Role::Admin]).await;

    let (status, _) = send(
        &app,
        request(Method::GET, "/api/me", Some(&outsider), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn second_decision_is_a_conflict_with_invalid_state_code() {
    let app = test_app().await;
    let request_id = submit_dana(&app).await;
    let approve_uri = format!("/api/access-requests/{request_id}/approve");

    let (first, body) = send(
        &app,
        request(
            Method::POST,
            approve_uri.as_str(),
            Some(&app.admin),
            Some(json!({ "role": "MANAGER" })),
        ),
    )
    .await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(body["status"], "APPROVED");
    assert!(body["actor_id"].is_string());

    let (second, body) = send(
        &app,
        request(
            Method::POST,
            format!("/api/access-requests/{request_id}/reject").as_str(),
            Some(&app.admin),
            Some(json!({ "reason": "too late" })),
        ),
    )
    .await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["code"], "invalid_state");
}

#[tokio::test]
async fn user_cannot_approve_through_the_router() {
    let app = test_app().await;
    let request_id = submit_dana(&app).await;

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            format!("/api/access-requests/{request_id}/approve").as_str(),
            Some(&app.user),
            Some(json!({ "role": "ADMIN" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        request(
            Method::GET,
            format!("/api/access-requests/{request_id}").as_str(),
            Some(&app.admin),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "PENDING");
}
