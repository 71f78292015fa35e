use serde::Deserialize;

use super::*;

#[derive(Debug, Default, Deserialize)]
pub struct RoleAssignmentListQuery {
    pub actor_id: Option<String>,
}

pub async fn list_role_assignments_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Query(query): Query<RoleAssignmentListQuery>,
) -> ApiResult<Json<Vec<RoleAssignmentResponse>>> {
    let target = query
        .actor_id
        .as_deref()
        .map(ActorId::from_str)
        .transpose()?;

    let assignments = state
        .security_admin_service
        .list_role_assignments(identity.actor_id(), target)
        .await?
        .into_iter()
        .map(RoleAssignmentResponse::from)
        .collect();

    Ok(Json(assignments))
}

pub async fn grant_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Json(payload): Json<GrantRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleAssignmentResponse>)> {
    let assignment = state
        .security_admin_service
        .grant_role(
            identity.actor_id(),
            ActorId::from_str(payload.actor_id.as_str())?,
            Role::from_transport(payload.role.as_str())?,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RoleAssignmentResponse::from(assignment)),
    ))
}

pub async fn revoke_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Json(payload): Json<RevokeRoleRequest>,
) -> ApiResult<StatusCode> {
    state
        .security_admin_service
        .revoke_role(
            identity.actor_id(),
            ActorId::from_str(payload.actor_id.as_str())?,
            Role::from_transport(payload.role.as_str())?,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn actor_roles_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Path(actor_id): Path<String>,
) -> ApiResult<Json<ActorRolesResponse>> {
    let target = ActorId::from_str(actor_id.as_str())?;
    let roles = state
        .security_admin_service
        .actor_roles(identity.actor_id(), target)
        .await?;

    Ok(Json(ActorRolesResponse::new(target, roles)))
}
