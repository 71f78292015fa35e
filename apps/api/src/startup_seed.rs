use assetdesk_application::SaveMenuPermissionInput;
use assetdesk_core::{AppError, AppResult};
use assetdesk_domain::{EmailAddress, ResourceKey, Role, RoleSet};
use tracing::info;

use crate::state::AppState;


const BOOTSTRAP_ADMIN_DISPLAY_NAME: &str = "Administrator";

const DEFAULT_MENU: &[(&str, i32, &[Role])] = &[
    ("dashboard", 10, &[Role::Admin, Role::Manager, Role::User]),
    ("assets", 20, &[Role::Admin, Role::Manager, Role::User]),
    ("tickets", 30, &[Role::Admin, Role::Manager, Role::User]),
    ("employees", 40, &[Role::Admin, Role::Manager]),
    ("licenses", 50, &[Role::Admin, Role::Manager]),
    ("admin.access-requests", 90, &[Role::Admin]),
    ("admin.roles", 100, &[Role::Admin]),
    ("admin.menu", 110, &[Role::Admin]),
    ("admin.audit-log", 120, &[Role::Admin]),
];

/// Seeds the default menu policy when no entry exists yet.
pub async fn seed_default_menu(state: &AppState) -> AppResult<()> {
    if !state.permission_policy_store.list_entries().await?.is_empty() {
        return Ok(());
    }

    for (resource_key, display_order, roles) in DEFAULT_MENU {
        state
            .permission_policy_store
            .save_entry(SaveMenuPermissionInput {
                resource_key: ResourceKey::new(*resource_key)?,
                display_order: *display_order,
                roles: roles.iter().copied().collect::<RoleSet>(),
            })
            .await?;
    }

    info!(entries = DEFAULT_MENU.len(), "default menu policy seeded");
    Ok(())
}

/// Ensures the bootstrap administrator exists and holds `ADMIN`.
pub async fn ensure_bootstrap_admin(state: &AppState, email: &EmailAddress) -> AppResult<()> {
    let actor = state
        .actor_directory
        .resolve_or_create_by_email(email, BOOTSTRAP_ADMIN_DISPLAY_NAME)
        .await?;

    match state
        .role_assignment_registry
        .grant(actor.actor_id, Role::Admin)
        .await
    {
        Ok(_) => info!(actor_id = %actor.actor_id, "bootstrap admin granted"),
        Err(AppError::Conflict(_)) => {}
        Err(error) => return Err(error),
    }

    info!(actor_id = %actor.actor_id, email = email.as_str(), "bootstrap admin ready");
    Ok(())
}
