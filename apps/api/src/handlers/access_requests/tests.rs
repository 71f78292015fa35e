use assetdesk_core::{ActorIdentity, AppError};
use assetdesk_domain::Role;
use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;

use super::{
    AccessRequestListQuery, approve_access_request_handler, get_access_request_handler,
    list_access_requests_handler, reject_access_request_handler, submit_access_request_handler,
};
use crate::dto::{
    AccessRequestResponse, ApproveAccessRequestRequest, RejectAccessRequestRequest,
    SubmitAccessRequestRequest,
};
use crate::error::ApiError;
use crate::state::AppState;
use crate::test_support::{memory_state, seed_actor};

async fn submit(state: &AppState, name: &str, email: &str) -> AccessRequestResponse {
    let result = submit_access_request_handler(
        State(state.clone()),
        Json(SubmitAccessRequestRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            description: Some("Needs the asset register".to_owned()),
        }),
    )
    .await;

    match result {
        Ok((status, Json(body))) => {
            assert_eq!(status, StatusCode::CREATED);
            body
        }
        Err(error) => panic!("submission failed: {error:?}"),
    }
}

async fn approve(
    state: &AppState,
    admin: &ActorIdentity,
    request_id: &str,
    role: &str,
) -> Result<AccessRequestResponse, ApiError> {
    approve_access_request_handler(
        State(state.clone()),
        Extension(admin.clone()),
        Path(request_id.to_owned()),
        Json(ApproveAccessRequestRequest {
            role: role.to_owned(),
        }),
    )
    .await
    .map(|Json(body)| body)
}

#[tokio::test]
async fn submission_is_public_and_pending() {
    let state = memory_state();

    let created = submit(&state, "Dana", "dana@assetdesk.test").await;

    assert_eq!(created.status, "PENDING");
    assert_eq!(created.email, "dana@assetdesk.test");
    assert!(created.assigned_role.is_none());
}

#[tokio::test]
async fn invalid_submission_is_rejected() {
    let state = memory_state();

    let result = submit_access_request_handler(
        State(state),
        Json(SubmitAccessRequestRequest {
            name: "Dana".to_owned(),
            email: "not-an-email".to_owned(),
            description: None,
        }),
    )
    .await;

    assert!(matches!(result, Err(ApiError(AppError::Validation(_)))));
}

#[tokio::test]
async fn approval_grants_role_and_repeats_conflict() {
    let state = memory_state();
    let admin = seed_actor(&state, "admin@assetdesk.test", &[Role::Admin]).await;
    let created = submit(&state, "Dana", "dana@assetdesk.test").await;

    let approved = approve(&state, &admin, created.request_id.as_str(), "user").await;
    let approved = match approved {
        Ok(body) => body,
        Err(error) => panic!("approval failed: {error:?}"),
    };
    assert_eq!(approved.status, "APPROVED");
    assert_eq!(approved.assigned_role.as_deref(), Some("USER"));
    assert_eq!(approved.decided_by, Some(admin.actor_id().to_string()));

    let dana = seed_actor(&state, "dana@assetdesk.test", &[]).await;
    assert_eq!(approved.actor_id, Some(dana.actor_id().to_string()));
    let roles = state.role_assignment_registry.roles_of(dana.actor_id()).await;
    assert!(matches!(roles, Ok(roles) if roles.contains(&Role::User)));

    let repeated = approve(&state, &admin, created.request_id.as_str(), "USER").await;
    assert!(matches!(repeated, Err(ApiError(AppError::InvalidState(_)))));
}

#[tokio::test]
async fn unknown_role_and_malformed_id_are_validation_errors() {
    let state = memory_state();
    let admin = seed_actor(&state, "admin@assetdesk.test", &[Role::Admin]).await;
    let created = submit(&state, "Dana", "dana@assetdesk.test").await;

    let unknown_role = approve(&state, &admin, created.request_id.as_str(), "OWNER").await;
    assert!(matches!(unknown_role, Err(ApiError(AppError::Validation(_)))));

    let malformed_id = approve(&state, &admin, "request-1", "USER").await;
    assert!(matches!(malformed_id, Err(ApiError(AppError::Validation(_)))));
}

#[tokio::test]
async fn rejection_keeps_reason_and_blocks_approval() {
    let state = memory_state();
    let admin = seed_actor(&state, "admin@assetdesk.test", &[Role::Admin]).await;
    let created = submit(&state, "Eve", "eve@assetdesk.test").await;

    let rejected = reject_access_request_handler(
        State(state.clone()),
        Extension(admin.clone()),
        Path(created.request_id.clone()),
        Json(RejectAccessRequestRequest {
            reason: Some("No business need".to_owned()),
        }),
    )
    .await;
    assert!(matches!(
        rejected,
        Ok(Json(ref body)) if body.status == "REJECTED"
            && body.decision_note.as_deref() == Some("No business need")
    ));

    let approval = approve(&state, &admin, created.request_id.as_str(), "USER").await;
    assert!(matches!(approval, Err(ApiError(AppError::InvalidState(_)))));

    let fetched = get_access_request_handler(
        State(state),
        Extension(admin),
        Path(created.request_id),
    )
    .await;
    assert!(matches!(fetched, Ok(Json(body)) if body.status == "REJECTED"));
}

#[tokio::test]
async fn listing_filters_by_status_and_requires_admin() {
    let state = memory_state();
    let admin = seed_actor(&state, "admin@assetdesk.test", &[Role::Admin]).await;
    let manager = seed_actor(&state, "manager@assetdesk.test", &[Role::Manager]).await;
    let first = submit(&state, "Dana", "dana@assetdesk.test").await;
    submit(&state, "Eve", "eve@assetdesk.test").await;
    assert!(
        approve(&state, &admin, first.request_id.as_str(), "USER")
            .await
            .is_ok()
    );

    let pending = list_access_requests_handler(
        State(state.clone()),
        Extension(admin),
        Query(AccessRequestListQuery {
            status: Some("pending".to_owned()),
            ..AccessRequestListQuery::default()
        }),
    )
    .await;
    assert!(matches!(
        pending,
        Ok(Json(ref body)) if body.len() == 1 && body[0].email == "eve@assetdesk.test"
    ));

    let forbidden = list_access_requests_handler(
        State(state),
        Extension(manager),
        Query(AccessRequestListQuery::default()),
    )
    .await;
    assert!(matches!(forbidden, Err(ApiError(AppError::Forbidden(_)))));
}
