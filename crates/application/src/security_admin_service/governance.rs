use super::*;

impl SecurityAdminService {
    /// Lists menu policy entries.
    pub async fn list_menu_permissions(&self, actor_id: ActorId) -> AppResult<Vec<MenuPermission>> {
        self.guard
            .require(actor_id, Operation::ListMenuPermissions)
            .await?;

        self.policy_store.list_entries().await
    }

    /// Saves one menu policy entry and emits an audit event.
    pub async fn save_menu_permission(
        &self,
        actor_id: ActorId,
        input: SaveMenuPermissionInput,
    ) -> AppResult<MenuPermission> {
        self.guard
            .require(actor_id, Operation::SaveMenuPermission)
            .await?;

        let entry = self.policy_store.save_entry(input).await?;
        let roles = entry
            .roles
            .iter()
            .map(|role| role.as_str())
            .collect::<Vec<_>>()
            .join(",");

        self.audit_repository
            .append_event(AuditEvent {
                subject: actor_id.to_string(),
                action: AuditAction::SecurityMenuPermissionSaved,
                resource_type: "menu_permission".to_owned(),
                resource_id: entry.resource_key.as_str().to_owned(),
                detail: Some(format!(
                    "saved menu permission '{}' at position {} for roles {roles}",
                    entry.resource_key, entry.display_order
                )),
            })
            .await?;

        info!(%actor_id, resource_key = entry.resource_key.as_str(), "menu policy updated");
        Ok(entry)
    }

    /// Returns recent audit entries.
    pub async fn list_audit_log(
        &self,
        actor_id: ActorId,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>> {
        self.guard.require(actor_id, Operation::ReadAuditLog).await?;

        self.audit_log_repository.list_recent_entries(query).await
    }
}
