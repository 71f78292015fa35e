use assetdesk_core::ActorId;
use assetdesk_domain::{MenuPermission, RoleAssignment, RoleSet};

use super::types::{
    ActorRolesResponse, AuditLogEntryResponse, MenuPermissionResponse, RoleAssignmentResponse,
};

impl From<RoleAssignment> for RoleAssignmentResponse {
    fn from(value: RoleAssignment) -> Self {
        Self {
            assignment_id: value.assignment_id.to_string(),
            actor_id: value.actor_id.to_string(),
            role: value.role.as_str().to_owned(),
            is_active: value.is_active,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

impl ActorRolesResponse {
    /// Creates a response for one actor's active roles.
    #[must_use]
    pub fn new(actor_id: ActorId, roles: RoleSet) -> Self {
        Self {
            actor_id: actor_id.to_string(),
            roles: roles.iter().map(|role| role.as_str().to_owned()).collect(),
        }
    }
}

impl From<MenuPermission> for MenuPermissionResponse {
    fn from(value: MenuPermission) -> Self {
        Self {
            resource_key: value.resource_key.as_str().to_owned(),
            display_order: value.display_order,
            roles: value
                .roles
                .iter()
                .map(|role| role.as_str().to_owned())
                .collect(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

impl From<assetdesk_application::AuditLogEntry> for AuditLogEntryResponse {
    fn from(value: assetdesk_application::AuditLogEntry) -> Self {
        Self {
            event_id: value.event_id,
            subject: value.subject,
            action: value.action,
            resource_type: value.resource_type,
            resource_id: value.resource_id,
            detail: value.detail,
            created_at: value.created_at,
        }
    }
}
