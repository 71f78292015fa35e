use std::sync::Arc;

use assetdesk_application::{
    AccessRequestWorkflow, ActorDirectory, AuthorizationGuard, MenuPermissionResolver,
    PermissionPolicyStore, RoleAssignmentRegistry, SecurityAdminService,
};
use axum::http::HeaderName;

use crate::api_config::StorageBackend;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_request_workflow: AccessRequestWorkflow,
    pub security_admin_service: SecurityAdminService,
    pub menu_permission_resolver: MenuPermissionResolver,
    pub authorization_guard: AuthorizationGuard,
    pub role_assignment_registry: RoleAssignmentRegistry,
    pub permission_policy_store: PermissionPolicyStore,
    pub actor_directory: Arc<dyn ActorDirectory>,
    pub actor_header: HeaderName,
    pub storage_backend: StorageBackend,
}
