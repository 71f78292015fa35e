use std::str::FromStr;

use assetdesk_core::{ActorId, ActorIdentity, AppError};
use assetdesk_domain::Operation;
use axum::extract::{Extension, Request, State};
use axum::http::{HeaderMap, HeaderName};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::ApiResult;
use crate::state::AppState;


/// Resolves the actor named by the trusted identity header.
///
/// Requests without the header, with a malformed id, or naming an unknown
/// actor are rejected with 401.
pub async fn require_actor(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let actor_id = actor_id_from_headers(request.headers(), &state.actor_header)?;
    let identity = resolve_identity(&state, actor_id).await?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Rejects the request with 403 unless the actor satisfies the operation
/// attached to the route.
pub async fn require_operation(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Extension(operation): Extension<Operation>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    ensure_operation_allowed(&state, &identity, operation).await?;

    Ok(next.run(request).await)
}

pub(crate) fn actor_id_from_headers(
    headers: &HeaderMap,
    actor_header: &HeaderName,
) -> Result<ActorId, AppError> {
    let header_value = headers
        .get(actor_header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    ActorId::from_str(header_value)
        .map_err(|_| AppError::Unauthorized("malformed actor identity".to_owned()))
}

pub(crate) async fn resolve_identity(
    state: &AppState,
    actor_id: ActorId,
) -> Result<ActorIdentity, AppError> {
    let actor = state
        .actor_directory
        .find_actor(actor_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized(format!("unknown actor '{actor_id}'")))?;

    Ok(actor.identity())
}

pub(crate) async fn ensure_operation_allowed(
    state: &AppState,
    identity: &ActorIdentity,
    operation: Operation,
) -> Result<(), AppError> {
    if state
        .authorization_guard
        .authorize_operation(identity.actor_id(), operation)
        .await
    {
        return Ok(());
    }

    warn!(
        actor_id = %identity.actor_id(),
        operation = operation.as_str(),
        "route access denied"
    );
    Err(AppError::Forbidden(format!(
        "operation '{}' is not permitted",
        operation.as_str()
    )))
}
