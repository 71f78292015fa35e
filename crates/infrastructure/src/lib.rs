//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod console_access_decision_notifier;
mod email_access_decision_notifier;
mod in_memory_access_request_repository;
mod in_memory_actor_directory;
mod in_memory_audit_repository;
mod in_memory_permission_policy_repository;
mod in_memory_role_assignment_repository;
mod postgres_access_request_repository;
mod postgres_actor_directory;
mod postgres_audit_log_repository;
mod postgres_permission_policy_repository;
mod postgres_role_assignment_repository;
mod smtp_email_service;

#[cfg(test)]
mod postgres_test_support;

pub use console_access_decision_notifier::ConsoleAccessDecisionNotifier;
pub use email_access_decision_notifier::EmailAccessDecisionNotifier;
pub use in_memory_access_request_repository::InMemoryAccessRequestRepository;
pub use in_memory_actor_directory::InMemoryActorDirectory;
pub use in_memory_audit_repository::InMemoryAuditRepository;
pub use in_memory_permission_policy_repository::InMemoryPermissionPolicyRepository;
pub use in_memory_role_assignment_repository::InMemoryRoleAssignmentRepository;
pub use postgres_access_request_repository::PostgresAccessRequestRepository;
pub use postgres_actor_directory::PostgresActorDirectory;
pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_permission_policy_repository::PostgresPermissionPolicyRepository;
pub use postgres_role_assignment_repository::PostgresRoleAssignmentRepository;
pub use smtp_email_service::{SmtpEmailConfig, SmtpEmailService};

/// Embedded SQL migrations for the PostgreSQL adapters.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
