use std::sync::Arc;

use assetdesk_application::{
    AccessRequestRepository, ActorDirectory, AuditLogRepository, AuditRepository,
    PermissionPolicyRepository, RoleAssignmentRepository,
};
use assetdesk_infrastructure::{
    InMemoryAccessRequestRepository, InMemoryActorDirectory, InMemoryAuditRepository,
    InMemoryPermissionPolicyRepository, InMemoryRoleAssignmentRepository,
    PostgresAccessRequestRepository, PostgresActorDirectory, PostgresAuditLogRepository,
    PostgresPermissionPolicyRepository, PostgresRoleAssignmentRepository,
};
use sqlx::PgPool;

/// Storage adapters behind every application port.
pub struct RepositorySet {
    pub role_assignment_repository: Arc<dyn RoleAssignmentRepository>,
    pub permission_policy_repository: Arc<dyn PermissionPolicyRepository>,
    pub access_request_repository: Arc<dyn AccessRequestRepository>,
    pub actor_directory: Arc<dyn ActorDirectory>,
    pub audit_repository: Arc<dyn AuditRepository>,
    pub audit_log_repository: Arc<dyn AuditLogRepository>,
}

impl RepositorySet {
    pub fn postgres(pool: &PgPool) -> Self {
        let audit = Arc::new(PostgresAuditLogRepository::new(pool.clone()));

        Self {
            role_assignment_repository: Arc::new(PostgresRoleAssignmentRepository::new(
                pool.clone(),
            )),
            permission_policy_repository: Arc::new(PostgresPermissionPolicyRepository::new(
                pool.clone(),
            )),
            access_request_repository: Arc::new(PostgresAccessRequestRepository::new(
                pool.clone(),
            )),
            actor_directory: Arc::new(PostgresActorDirectory::new(pool.clone())),
            audit_repository: audit.clone(),
            audit_log_repository: audit,
        }
    }

    /// Process-local storage; contents are lost on restart.
    pub fn in_memory() -> Self {
        let audit = Arc::new(InMemoryAuditRepository::new());

        Self {
            role_assignment_repository: Arc::new(InMemoryRoleAssignmentRepository::new()),
            permission_policy_repository: Arc::new(InMemoryPermissionPolicyRepository::new()),
            access_request_repository: Arc::new(InMemoryAccessRequestRepository::new()),
            actor_directory: Arc::new(InMemoryActorDirectory::new()),
            audit_repository: audit.clone(),
            audit_log_repository: audit,
        }
    }
}
