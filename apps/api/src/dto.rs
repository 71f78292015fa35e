mod access_requests;
mod common;
mod security;

pub use access_requests::{
    AccessRequestResponse, ApproveAccessRequestRequest, RejectAccessRequestRequest,
    SubmitAccessRequestRequest,
};
pub use common::{ActorProfileResponse, HealthResponse, MenuResponse};
pub use security::{
    ActorRolesResponse, AuditLogEntryResponse, GrantRoleRequest, MenuPermissionResponse,
    RevokeRoleRequest, RoleAssignmentResponse, SaveMenuPermissionRequest,
};
