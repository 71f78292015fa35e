use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use assetdesk_application::RoleAssignmentRepository;
use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{Role, RoleAssignment};

/// In-memory role assignment repository keyed by `(actor, role)`.
#[derive(Debug, Default)]
pub struct InMemoryRoleAssignmentRepository {
    assignments: RwLock<HashMap<(ActorId, Role), RoleAssignment>>,
}

impl InMemoryRoleAssignmentRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleAssignmentRepository for InMemoryRoleAssignmentRepository {
    async fn find_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
    ) -> AppResult<Option<RoleAssignment>> {
        Ok(self.assignments.read().await.get(&(actor_id, role)).cloned())
    }

    async fn insert_assignment(&self, assignment: RoleAssignment) -> AppResult<()> {
        let key = (assignment.actor_id, assignment.role);
        let mut assignments = self.assignments.write().await;

        if assignments.contains_key(&key) {
            return Err(AppError::Conflict(format!(
                "actor '{}' already has an assignment for role '{}'",
                key.0,
                key.1.as_str()
            )));
        }

        assignments.insert(key, assignment);
        Ok(())
    }

    async fn reactivate_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleAssignment>> {
        let mut assignments = self.assignments.write().await;
        let Some(assignment) = assignments
            .get_mut(&(actor_id, role))
            .filter(|assignment| !assignment.is_active)
        else {
            return Ok(None);
        };

        assignment.is_active = true;
        assignment.updated_at = now;
        Ok(Some(assignment.clone()))
    }

    async fn deactivate_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut assignments = self.assignments.write().await;
        let Some(assignment) = assignments
            .get_mut(&(actor_id, role))
            .filter(|assignment| assignment.is_active)
        else {
            return Ok(false);
        };

        assignment.is_active = false;
        assignment.updated_at = now;
        Ok(true)
    }

    async fn list_active_roles(&self, actor_id: ActorId) -> AppResult<Vec<Role>> {
        let mut roles: Vec<Role> = self
            .assignments
            .read()
            .await
            .values()
            .filter(|assignment| assignment.actor_id == actor_id && assignment.is_active)
            .map(|assignment| assignment.role)
            .collect();
        roles.sort();
        Ok(roles)
    }

    async fn list_assignments(
        &self,
        actor_id: Option<ActorId>,
    ) -> AppResult<Vec<RoleAssignment>> {
        let mut values: Vec<RoleAssignment> = self
            .assignments
            .read()
            .await
            .values()
            .filter(|assignment| actor_id.is_none_or(|actor_id| assignment.actor_id == actor_id))
            .cloned()
            .collect();
        values.sort_by(|left, right| {
            left.created_at
                .cmp(&right.created_at)
                .then_with(|| left.role.cmp(&right.role))
        });
        Ok(values)
    }
}
