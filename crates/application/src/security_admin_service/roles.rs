use super::*;

impl SecurityAdminService {
    /// Grants a role to a known actor and emits an audit event.
    pub async fn grant_role(
        &self,
        actor_id: ActorId,
        target: ActorId,
        role: Role,
    ) -> AppResult<RoleAssignment> {
        self.guard.require(actor_id, Operation::GrantRole).await?;
        self.require_known_actor(target).await?;

        let assignment = self.registry.grant(target, role).await?;

        self.audit_repository
            .append_event(AuditEvent {
                subject: actor_id.to_string(),
                action: AuditAction::SecurityRoleGranted,
                resource_type: "role_assignment".to_owned(),
                resource_id: format!("{target}:{}", role.as_str()),
                detail: Some(format!("granted role '{}' to '{target}'", role.as_str())),
            })
            .await?;

        Ok(assignment)
    }

    /// Revokes a role and emits an audit event. Revoking a role the target
    /// does not hold succeeds without changes.
    pub async fn revoke_role(&self, actor_id: ActorId, target: ActorId, role: Role) -> AppResult<()> {
        self.guard.require(actor_id, Operation::RevokeRole).await?;

        self.registry.revoke(target, role).await?;

        self.audit_repository
            .append_event(AuditEvent {
                subject: actor_id.to_string(),
                action: AuditAction::SecurityRoleRevoked,
                resource_type: "role_assignment".to_owned(),
                resource_id: format!("{target}:{}", role.as_str()),
                detail: Some(format!("revoked role '{}' from '{target}'", role.as_str())),
            })
            .await
    }

    /// Lists assignment records, including revoked ones.
    pub async fn list_role_assignments(
        &self,
        actor_id: ActorId,
        target: Option<ActorId>,
    ) -> AppResult<Vec<RoleAssignment>> {
        self.guard
            .require(actor_id, Operation::ListRoleAssignments)
            .await?;

        self.registry.list_assignments(target).await
    }

    /// Returns the active roles of an actor.
    pub async fn actor_roles(&self, actor_id: ActorId, target: ActorId) -> AppResult<RoleSet> {
        self.guard.require(actor_id, Operation::ViewActorRoles).await?;

        self.registry.roles_of(target).await
    }

    async fn require_known_actor(&self, target: ActorId) -> AppResult<()> {
        if self.actor_directory.find_actor(target).await?.is_none() {
            return Err(AppError::NotFound(format!("actor '{target}' not found")));
        }

        Ok(())
    }
}
