use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for a direct role grant.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/grant-role-request.ts"
)]
pub struct GrantRoleRequest {
    pub actor_id: String,
    pub role: String,
}

/// Incoming payload for a role revocation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/revoke-role-request.ts"
)]
pub struct RevokeRoleRequest {
    pub actor_id: String,
    pub role: String,
}

/// API representation of one role assignment record.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-response.ts"
)]
pub struct RoleAssignmentResponse {
    pub assignment_id: String,
    pub actor_id: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Active roles of one actor.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/actor-roles-response.ts"
)]
pub struct ActorRolesResponse {
    pub actor_id: String,
    pub roles: Vec<String>,
}

/// Incoming payload for saving a menu policy entry.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/save-menu-permission-request.ts"
)]
pub struct SaveMenuPermissionRequest {
    pub display_order: i32,
    pub roles: Vec<String>,
}

/// API representation of a menu policy entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/menu-permission-response.ts"
)]
pub struct MenuPermissionResponse {
    pub resource_key: String,
    pub display_order: i32,
    pub roles: Vec<String>,
    pub updated_at: String,
}

/// API representation of an audit log entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/audit-log-entry-response.ts"
)]
pub struct AuditLogEntryResponse {
    pub event_id: String,
    pub subject: String,
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub detail: Option<String>,
    pub created_at: String,
}
