use std::str::FromStr;

use assetdesk_application::{AccessRequestQuery, SubmitAccessRequestInput};
use assetdesk_core::ActorIdentity;
use assetdesk_domain::{AccessRequestId, AccessRequestStatus, Role};
use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::dto::{
    AccessRequestResponse, ApproveAccessRequestRequest, RejectAccessRequestRequest,
    SubmitAccessRequestRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

#[cfg(test)]
mod tests;

const DEFAULT_PAGE_SIZE: usize = 50;
const MAX_PAGE_SIZE: usize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct AccessRequestListQuery {
    pub status: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn submit_access_request_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAccessRequestRequest>,
) -> ApiResult<(StatusCode, Json<AccessRequestResponse>)> {
    let request = state
        .access_request_workflow
        .submit(SubmitAccessRequestInput {
            name: payload.name,
            email: payload.email,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AccessRequestResponse::from(request))))
}

pub async fn list_access_requests_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Query(query): Query<AccessRequestListQuery>,
) -> ApiResult<Json<Vec<AccessRequestResponse>>> {
    let status = query
        .status
        .as_deref()
        .map(AccessRequestStatus::from_transport)
        .transpose()?;

    let requests = state
        .access_request_workflow
        .list(
            identity.actor_id(),
            AccessRequestQuery {
                status,
                limit: query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
                offset: query.offset.unwrap_or(0),
            },
        )
        .await?
        .into_iter()
        .map(AccessRequestResponse::from)
        .collect();

    Ok(Json(requests))
}

pub async fn get_access_request_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Path(request_id): Path<String>,
) -> ApiResult<Json<AccessRequestResponse>> {
    let request = state
        .access_request_workflow
        .find(
            identity.actor_id(),
            AccessRequestId::from_str(request_id.as_str())?,
        )
        .await?;

    Ok(Json(AccessRequestResponse::from(request)))
}

pub async fn approve_access_request_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Path(request_id): Path<String>,
    Json(payload): Json<ApproveAccessRequestRequest>,
) -> ApiResult<Json<AccessRequestResponse>> {
    let request = state
        .access_request_workflow
        .approve(
            identity.actor_id(),
            AccessRequestId::from_str(request_id.as_str())?,
            Role::from_transport(payload.role.as_str())?,
        )
        .await?;

    Ok(Json(AccessRequestResponse::from(request)))
}

pub async fn reject_access_request_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Path(request_id): Path<String>,
    Json(payload): Json<RejectAccessRequestRequest>,
) -> ApiResult<Json<AccessRequestResponse>> {
    let request = state
        .access_request_workflow
        .reject(
            identity.actor_id(),
            AccessRequestId::from_str(request_id.as_str())?,
            payload.reason,
        )
        .await?;

    Ok(Json(AccessRequestResponse::from(request)))
}
