use std::str::FromStr;

use assetdesk_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{Role, RoleSet};

/// Protected operations and their statically declared role requirements.
///
/// The transport layer attaches one operation to each route and asks the
/// authorization guard whether the current actor satisfies
/// [`Operation::required_roles`]. An empty requirement means any
/// authenticated actor may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Lists access requests.
    ListAccessRequests,
    /// Reads one access request.
    ViewAccessRequest,
    /// Approves a pending access request.
    ApproveAccessRequest,
    /// Rejects a pending access request.
    RejectAccessRequest,
    /// Lists role assignments.
    ListRoleAssignments,
    /// Grants a role directly.
    GrantRole,
    /// Revokes a role.
    RevokeRole,
    /// Reads the active roles of an actor.
    ViewActorRoles,
    /// Lists menu policy entries.
    ListMenuPermissions,
    /// Creates or replaces a menu policy entry.
    SaveMenuPermission,
    /// Reads the audit log.
    ReadAuditLog,
    /// Reads the caller's own identity.
    ViewOwnProfile,
    /// Resolves the caller's own menu.
    ResolveOwnMenu,
}

impl Operation {
    /// Returns a stable identifier for logs and audit details.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListAccessRequests => "access_request.list",
            Self::ViewAccessRequest => "access_request.view",
            Self::ApproveAccessRequest => "access_request.approve",
            Self::RejectAccessRequest => "access_request.reject",
            Self::ListRoleAssignments => "role_assignment.list",
            Self::GrantRole => "role_assignment.grant",
            Self::RevokeRole => "role_assignment.revoke",
            Self::ViewActorRoles => "role_assignment.view_actor",
            Self::ListMenuPermissions => "menu_permission.list",
            Self::SaveMenuPermission => "menu_permission.save",
            Self::ReadAuditLog => "audit_log.read",
            Self::ViewOwnProfile => "me.profile",
            Self::ResolveOwnMenu => "me.menu",
        }
    }

    /// Returns the roles of which the actor must hold at least one.
    #[must_use]
    pub fn required_roles(&self) -> RoleSet {
        match self {
            Self::ListAccessRequests
            | Self::ViewAccessRequest
            | Self::ApproveAccessRequest
            | Self::RejectAccessRequest
            | Self::ListRoleAssignments
            | Self::GrantRole
            | Self::RevokeRole
            | Self::ListMenuPermissions
            | Self::SaveMenuPermission
            | Self::ReadAuditLog => RoleSet::from([Role::Admin]),
            Self::ViewActorRoles => RoleSet::from([Role::Admin, Role::Manager]),
            Self::ViewOwnProfile | Self::ResolveOwnMenu => RoleSet::new(),
        }
    }

    /// Returns all known operations.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Operation] = &[
            Operation::ListAccessRequests,
            Operation::ViewAccessRequest,
            Operation::ApproveAccessRequest,
            Operation::RejectAccessRequest,
            Operation::ListRoleAssignments,
            Operation::GrantRole,
            Operation::RevokeRole,
            Operation::ViewActorRoles,
            Operation::ListMenuPermissions,
            Operation::SaveMenuPermission,
            Operation::ReadAuditLog,
            Operation::ViewOwnProfile,
            Operation::ResolveOwnMenu,
        ];

        ALL
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|operation| operation.as_str() == value)
            .copied()
            .ok_or_else(|| AppError::Validation(format!("unknown operation '{value}'")))
    }
}

/// Stable audit actions emitted by application use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when an access request is submitted.
    AccessRequestSubmitted,
    /// Emitted when an access request is approved.
    AccessRequestApproved,
    /// Emitted when an access request is rejected.
    AccessRequestRejected,
    /// Emitted when a role is granted or reactivated.
    SecurityRoleGranted,
    /// Emitted when a role is revoked.
    SecurityRoleRevoked,
    /// Emitted when a menu policy entry is saved.
    SecurityMenuPermissionSaved,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessRequestSubmitted => "access_request.submitted",
            Self::AccessRequestApproved => "access_request.approved",
            Self::AccessRequestRejected => "access_request.rejected",
            Self::SecurityRoleGranted => "security.role.granted",
            Self::SecurityRoleRevoked => "security.role.revoked",
            Self::SecurityMenuPermissionSaved => "security.menu_permission.saved",
        }
    }
}
