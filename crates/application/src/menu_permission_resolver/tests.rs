use std::sync::Arc;

use assetdesk_core::ActorId;
use assetdesk_domain::{Role, RoleSet};

use crate::test_support::{FakePermissionPolicyRepository, FakeRoleAssignmentRepository, resource_key};
use crate::{
    AuthorizationGuard, PermissionPolicyStore, RoleAssignmentRegistry, SaveMenuPermissionInput,
};

use super::MenuPermissionResolver;

async fn resolver() -> (MenuPermissionResolver, RoleAssignmentRegistry) {
    let registry = RoleAssignmentRegistry::new(Arc::new(FakeRoleAssignmentRepository::default()));
    let store = PermissionPolicyStore::new(Arc::new(FakePermissionPolicyRepository::default()));

    for (key, order, roles) in [
        ("dashboard", 10, RoleSet::from([Role::Admin, Role::Manager, Role::User])),
        ("assets", 20, RoleSet::from([Role::Admin, Role::Manager])),
        ("admin.users", 90, RoleSet::from([Role::Admin])),
    ] {
        let saved = store
            .save_entry(SaveMenuPermissionInput {
                resource_key: resource_key(key),
                display_order: order,
                roles,
            })
            .await;
        assert!(saved.is_ok());
    }

    let resolver = MenuPermissionResolver::new(AuthorizationGuard::new(registry.clone()), store);
    (resolver, registry)
}

fn keys(menu: &[assetdesk_domain::ResourceKey]) -> Vec<&str> {
    menu.iter().map(|key| key.as_str()).collect()
}

#[tokio::test]
async fn manager_sees_entries_allowing_manager_in_order() {
    let (resolver, registry) = resolver().await;
    let manager = ActorId::new();
    assert!(registry.grant(manager, Role::Manager).await.is_ok());

    let menu = resolver.resolve_menu(manager).await;
    assert!(matches!(menu.as_deref().map(keys), Ok(keys) if keys == vec!["dashboard", "assets"]));
}

#[tokio::test]
async fn actor_without_roles_sees_nothing() {
    let (resolver, _) = resolver().await;

    let menu = resolver.resolve_menu(ActorId::new()).await;
    assert!(matches!(menu, Ok(menu) if menu.is_empty()));
}

#[tokio::test]
async fn unconfigured_resources_never_appear() {
    let (resolver, registry) = resolver().await;
    let admin = ActorId::new();
    for role in Role::all() {
        assert!(registry.grant(admin, *role).await.is_ok());
    }

    let menu = resolver.resolve_menu(admin).await;
    assert!(matches!(
        menu.as_deref().map(keys),
        Ok(keys) if keys == vec!["dashboard", "assets", "admin.users"] && !keys.contains(&"reports")
    ));
}
