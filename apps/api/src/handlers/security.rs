use std::str::FromStr;

use assetdesk_core::{ActorId, ActorIdentity};
use assetdesk_domain::Role;
use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;

use crate::dto::{
    ActorRolesResponse, AuditLogEntryResponse, GrantRoleRequest, MenuPermissionResponse,
    RevokeRoleRequest, RoleAssignmentResponse, SaveMenuPermissionRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod audit;
mod governance;
mod roles;


pub use audit::list_audit_log_handler;
pub use governance::{list_menu_permissions_handler, save_menu_permission_handler};
pub use roles::{
    actor_roles_handler, grant_role_handler, list_role_assignments_handler, revoke_role_handler,
};
