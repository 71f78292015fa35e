use assetdesk_application::SaveMenuPermissionInput;
use assetdesk_domain::ResourceKey;

use super::*;

pub async fn list_menu_permissions_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
) -> ApiResult<Json<Vec<MenuPermissionResponse>>> {
    let entries = state
        .security_admin_service
        .list_menu_permissions(identity.actor_id())
        .await?
        .into_iter()
        .map(MenuPermissionResponse::from)
        .collect();

    Ok(Json(entries))
}

pub async fn save_menu_permission_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActorIdentity>,
    Path(resource_key): Path<String>,
    Json(payload): Json<SaveMenuPermissionRequest>,
) -> ApiResult<Json<MenuPermissionResponse>> {
    let entry = state
        .security_admin_service
        .save_menu_permission(
            identity.actor_id(),
            SaveMenuPermissionInput {
                resource_key: ResourceKey::new(resource_key)?,
                display_order: payload.display_order,
                roles: Role::parse_set(payload.roles.as_slice())?,
            },
        )
        .await?;

    Ok(Json(MenuPermissionResponse::from(entry)))
}
