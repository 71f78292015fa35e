use std::sync::Arc;

use tracing::info;

use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{AuditAction, MenuPermission, Operation, Role, RoleAssignment, RoleSet};

use crate::{
    ActorDirectory, AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository,
    AuditRepository, AuthorizationGuard, PermissionPolicyStore, RoleAssignmentRegistry,
    SaveMenuPermissionInput,
};

mod governance;
mod roles;


/// Application service for security administration workflows.
///
/// Every mutation is authorized against the caller and recorded in the audit
/// trail.
#[derive(Clone)]
pub struct SecurityAdminService {
    guard: AuthorizationGuard,
    registry: RoleAssignmentRegistry,
    policy_store: PermissionPolicyStore,
    actor_directory: Arc<dyn ActorDirectory>,
    audit_log_repository: Arc<dyn AuditLogRepository>,
    audit_repository: Arc<dyn AuditRepository>,
}

impl SecurityAdminService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        guard: AuthorizationGuard,
        registry: RoleAssignmentRegistry,
        policy_store: PermissionPolicyStore,
        actor_directory: Arc<dyn ActorDirectory>,
        audit_log_repository: Arc<dyn AuditLogRepository>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            guard,
            registry,
            policy_store,
            actor_directory,
            audit_log_repository,
            audit_repository,
        }
    }
}
