use async_trait::async_trait;
use chrono::{DateTime, Utc};

use assetdesk_core::{ActorId, AppResult};
use assetdesk_domain::{Role, RoleAssignment};

/// Repository port for role assignment records.
///
/// Implementations must enforce uniqueness over `(actor_id, role)` at the
/// storage boundary so concurrent writers cannot create duplicates.
#[async_trait]
pub trait RoleAssignmentRepository: Send + Sync {
    /// Finds the assignment for an actor and role, active or not.
    async fn find_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
    ) -> AppResult<Option<RoleAssignment>>;

    /// Inserts a new assignment.
    ///
    /// Fails with `AppError::Conflict` when a record for the pair already exists.
    async fn insert_assignment(&self, assignment: RoleAssignment) -> AppResult<()>;

    /// Reactivates an inactive assignment.
    ///
    /// Returns `None` when no inactive record matched, which includes losing a
    /// race against a concurrent reactivation.
    async fn reactivate_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleAssignment>>;

    /// Deactivates an active assignment and returns whether a record changed.
    async fn deactivate_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<bool>;

    /// Lists the roles an actor currently holds.
    async fn list_active_roles(&self, actor_id: ActorId) -> AppResult<Vec<Role>>;

    /// Lists assignment records, optionally for a single actor.
    async fn list_assignments(&self, actor_id: Option<ActorId>)
    -> AppResult<Vec<RoleAssignment>>;
}
