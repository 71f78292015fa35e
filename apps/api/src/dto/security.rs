mod conversions;
mod types;

pub use types::{
    ActorRolesResponse, AuditLogEntryResponse, GrantRoleRequest, MenuPermissionResponse,
    RevokeRoleRequest, RoleAssignmentResponse, SaveMenuPermissionRequest,
};
