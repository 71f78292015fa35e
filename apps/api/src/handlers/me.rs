use assetdesk_core::ActorIdentity;
use axum::Json;
use axum::extract::{Extension, State};

use crate::dto::{ActorProfileResponse, MenuResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn me_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
) -> ApiResult<Json<ActorProfileResponse>> {
    let roles = state
        .role_assignment_registry
        .roles_of(identity.actor_id())
        .await?;

    Ok(Json(ActorProfileResponse::from_identity_with_roles(
        &identity, roles,
    )))
}

pub async fn my_menu_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
) -> ApiResult<Json<MenuResponse>> {
    let menu = state
        .menu_permission_resolver
        .resolve_menu(identity.actor_id())
        .await?;

    Ok(Json(MenuResponse::from(menu)))
}
