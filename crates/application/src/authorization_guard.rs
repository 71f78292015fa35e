use tracing::{debug, warn};

use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{Operation, RoleSet};

use crate::RoleAssignmentRegistry;


/// Per-operation allow/deny decisions over role requirements.
///
/// Requirements are any-match: the actor needs at least one of the required
/// roles. An empty requirement admits every actor.
#[derive(Clone)]
pub struct AuthorizationGuard {
    registry: RoleAssignmentRegistry,
}

impl AuthorizationGuard {
    /// Creates a guard reading roles from the registry.
    #[must_use]
    pub fn new(registry: RoleAssignmentRegistry) -> Self {
        Self { registry }
    }

    /// Returns whether the actor satisfies the required role set.
    ///
    /// Never fails: a registry error is logged and treated as a denial.
    pub async fn authorize(&self, actor_id: ActorId, required_roles: &RoleSet) -> bool {
        if required_roles.is_empty() {
            return true;
        }

        let actor_roles = match self.registry.roles_of(actor_id).await {
            Ok(roles) => roles,
            Err(error) => {
                warn!(%actor_id, %error, "role lookup failed, denying access");
                return false;
            }
        };

        let allowed = !actor_roles.is_disjoint(required_roles);
        debug!(%actor_id, ?required_roles, ?actor_roles, allowed, "authorization decision");
        allowed
    }

    /// Returns whether the actor may perform the operation.
    pub async fn authorize_operation(&self, actor_id: ActorId, operation: Operation) -> bool {
        self.authorize(actor_id, &operation.required_roles()).await
    }

    /// Fails with [`AppError::Forbidden`] unless the actor may perform the operation.
    pub async fn require(&self, actor_id: ActorId, operation: Operation) -> AppResult<()> {
        if self.authorize_operation(actor_id, operation).await {
            return Ok(());
        }

        warn!(%actor_id, operation = operation.as_str(), "operation denied");
        Err(AppError::Forbidden(format!(
            "actor '{actor_id}' may not perform '{}'",
            operation.as_str()
        )))
    }
}
