use assetdesk_core::AppError;
use assetdesk_domain::Operation;
use axum::middleware::from_fn_with_state;
use axum::routing::{MethodRouter, get, post, put};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

#[cfg(test)]
mod tests;

use cors::build_cors_layer;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = build_cors_layer(frontend_url, app_state.actor_header.clone())?;
    let state = &app_state;

    let protected_routes = Router::new()
        .route(
            "/api/access-requests",
            guarded(
                get(handlers::access_requests::list_access_requests_handler),
                Operation::ListAccessRequests,
                state,
            ),
        )
        .route(
            "/api/access-requests/{request_id}",
            guarded(
                get(handlers::access_requests::get_access_request_handler),
                Operation::ViewAccessRequest,
                state,
            ),
        )
        .route(
            "/api/access-requests/{request_id}/approve",
            guarded(
                post(handlers::access_requests::approve_access_request_handler),
                Operation::ApproveAccessRequest,
                state,
            ),
        )
        .route(
            "/api/access-requests/{request_id}/reject",
            guarded(
                post(handlers::access_requests::reject_access_request_handler),
                Operation::RejectAccessRequest,
                state,
            ),
        )
        .route(
            "/api/security/role-assignments",
            guarded(
                get(handlers::security::list_role_assignments_handler),
                Operation::ListRoleAssignments,
                state,
            )
            .merge(guarded(
                post(handlers::security::grant_role_handler),
                Operation::GrantRole,
                state,
            )),
        )
        .route(
            "/api/security/role-revocations",
            guarded(
                post(handlers::security::revoke_role_handler),
                Operation::RevokeRole,
                state,
            ),
        )
        .route(
            "/api/security/actors/{actor_id}/roles",
            guarded(
                get(handlers::security::actor_roles_handler),
                Operation::ViewActorRoles,
                state,
            ),
        )
        .route(
            "/api/security/menu-permissions",
            guarded(
                get(handlers::security::list_menu_permissions_handler),
                Operation::ListMenuPermissions,
                state,
            ),
        )
        .route(
            "/api/security/menu-permissions/{resource_key}",
            guarded(
                put(handlers::security::save_menu_permission_handler),
                Operation::SaveMenuPermission,
                state,
            ),
        )
        .route(
            "/api/security/audit-log",
            guarded(
                get(handlers::security::list_audit_log_handler),
                Operation::ReadAuditLog,
                state,
            ),
        )
        .route(
            "/api/me",
            guarded(
                get(handlers::me::me_handler),
                Operation::ViewOwnProfile,
                state,
            ),
        )
        .route(
            "/api/me/menu",
            guarded(
                get(handlers::me::my_menu_handler),
                Operation::ResolveOwnMenu,
                state,
            ),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_actor,
        ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/access-requests",
            post(handlers::access_requests::submit_access_request_handler),
        );

    Ok(Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}

/// Attaches the route's operation and the role check that enforces it.
fn guarded(
    method_router: MethodRouter<AppState>,
    operation: Operation,
    state: &AppState,
) -> MethodRouter<AppState> {
    method_router
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::require_operation,
        ))
        .layer(Extension(operation))
}
