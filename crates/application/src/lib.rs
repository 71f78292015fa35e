//! Application services and ports.

#![forbid(unsafe_code)]

mod access_request_ports;
mod access_request_workflow;
mod actor_ports;
mod audit_ports;
mod authorization_guard;
mod menu_permission_resolver;
mod notification_ports;
mod permission_policy_ports;
mod permission_policy_store;
mod role_assignment_ports;
mod role_assignment_registry;
mod security_admin_service;

#[cfg(test)]
mod test_support;

pub use access_request_ports::{AccessRequestQuery, AccessRequestRepository};
pub use access_request_workflow::{AccessRequestWorkflow, SubmitAccessRequestInput};
pub use actor_ports::ActorDirectory;
pub use audit_ports::{
    AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository,
};
pub use authorization_guard::AuthorizationGuard;
pub use menu_permission_resolver::MenuPermissionResolver;
pub use notification_ports::{AccessDecisionNotice, AccessDecisionNotifier, EmailService};
pub use permission_policy_ports::{PermissionPolicyRepository, SaveMenuPermissionInput};
pub use permission_policy_store::PermissionPolicyStore;
pub use role_assignment_ports::RoleAssignmentRepository;
pub use role_assignment_registry::RoleAssignmentRegistry;
pub use security_admin_service::SecurityAdminService;
