//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access_request;
mod actor;
mod menu;
mod role;
mod role_assignment;
mod security;

pub use access_request::{
    ACCESS_REQUEST_TEXT_MAX_LENGTH, APPLICANT_NAME_MAX_LENGTH, AccessDecision, AccessRequest,
    AccessRequestId, AccessRequestStatus,
};
pub use actor::{Actor, EMAIL_MAX_LENGTH, EmailAddress};
pub use menu::{MenuPermission, RESOURCE_KEY_MAX_LENGTH, ResourceKey};
pub use role::{Role, RoleSet};
pub use role_assignment::RoleAssignment;
pub use security::{AuditAction, Operation};
