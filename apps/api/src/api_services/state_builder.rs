use assetdesk_application::{
    AccessRequestWorkflow, AuthorizationGuard, MenuPermissionResolver, PermissionPolicyStore,
    RoleAssignmentRegistry, SecurityAdminService,
};
use assetdesk_core::AppError;

use crate::api_config::ApiConfig;
use crate::state::AppState;

use super::email::build_decision_notifier;

mod repositories;

pub use repositories::RepositorySet;

pub fn build_app_state(repositories: RepositorySet, config: &ApiConfig) -> Result<AppState, AppError> {
    let notifier = build_decision_notifier(config)?;

    let role_assignment_registry =
        RoleAssignmentRegistry::new(repositories.role_assignment_repository);
    let authorization_guard = AuthorizationGuard::new(role_assignment_registry.clone());
    let permission_policy_store =
        PermissionPolicyStore::new(repositories.permission_policy_repository);

    Ok(AppState {
        access_request_workflow: AccessRequestWorkflow::new(
            authorization_guard.clone(),
            repositories.access_request_repository,
            role_assignment_registry.clone(),
            repositories.actor_directory.clone(),
            repositories.audit_repository.clone(),
            notifier,
        ),
        security_admin_service: SecurityAdminService::new(
            authorization_guard.clone(),
            role_assignment_registry.clone(),
            permission_policy_store.clone(),
            repositories.actor_directory.clone(),
            repositories.audit_log_repository,
            repositories.audit_repository,
        ),
        menu_permission_resolver: MenuPermissionResolver::new(
            authorization_guard.clone(),
            permission_policy_store.clone(),
        ),
        authorization_guard,
        role_assignment_registry,
        permission_policy_store,
        actor_directory: repositories.actor_directory,
        actor_header: config.actor_header.clone(),
        storage_backend: config.storage_backend,
    })
}
