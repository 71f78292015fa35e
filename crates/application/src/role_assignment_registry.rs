use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{Role, RoleAssignment, RoleSet};

use crate::RoleAssignmentRepository;


/// Application service owning which roles each actor holds.
#[derive(Clone)]
pub struct RoleAssignmentRegistry {
    repository: Arc<dyn RoleAssignmentRepository>,
}

impl RoleAssignmentRegistry {
    /// Creates a registry from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn RoleAssignmentRepository>) -> Self {
        Self { repository }
    }

    /// Grants a role, reactivating a previously revoked record when present.
    ///
    /// Fails with [`AppError::Conflict`] when the actor already holds the role,
    /// including when a concurrent grant for the same pair won the race.
    pub async fn grant(&self, actor_id: ActorId, role: Role) -> AppResult<RoleAssignment> {
        let now = Utc::now();

        match self.repository.find_assignment(actor_id, role).await? {
            Some(existing) if existing.is_active => Err(already_active(actor_id, role)),
            Some(_) => {
                let reactivated = self
                    .repository
                    .reactivate_assignment(actor_id, role, now)
                    .await?
                    .ok_or_else(|| already_active(actor_id, role))?;
                info!(%actor_id, role = role.as_str(), "role assignment reactivated");
                Ok(reactivated)
            }
            None => {
                let assignment = RoleAssignment::activate_new(actor_id, role, now);
                self.repository
                    .insert_assignment(assignment.clone())
                    .await
                    .map_err(|error| match error {
                        AppError::Conflict(_) => already_active(actor_id, role),
                        other => other,
                    })?;
                info!(%actor_id, role = role.as_str(), "role assignment created");
                Ok(assignment)
            }
        }
    }

    /// Revokes a role. Missing or already inactive assignments are a no-op.
    pub async fn revoke(&self, actor_id: ActorId, role: Role) -> AppResult<()> {
        let changed = self
            .repository
            .deactivate_assignment(actor_id, role, Utc::now())
            .await?;

        if changed {
            info!(%actor_id, role = role.as_str(), "role assignment revoked");
        }

        Ok(())
    }

    /// Returns the roles the actor currently holds; empty for unknown actors.
    pub async fn roles_of(&self, actor_id: ActorId) -> AppResult<RoleSet> {
        Ok(self
            .repository
            .list_active_roles(actor_id)
            .await?
            .into_iter()
            .collect())
    }

    /// Lists assignment records including revoked ones.
    pub async fn list_assignments(
        &self,
        actor_id: Option<ActorId>,
    ) -> AppResult<Vec<RoleAssignment>> {
        self.repository.list_assignments(actor_id).await
    }
}

fn already_active(actor_id: ActorId, role: Role) -> AppError {
    AppError::Conflict(format!(
        "actor '{actor_id}' already holds role '{}'",
        role.as_str()
    ))
}
