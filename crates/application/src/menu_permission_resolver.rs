use tracing::debug;

use assetdesk_core::{ActorId, AppResult};
use assetdesk_domain::ResourceKey;

use crate::{AuthorizationGuard, PermissionPolicyStore};

#[cfg(test)]
mod tests;

/// Computes which configured menu entries an actor may see.
///
/// The result only drives navigation; protected operations are checked again
/// when invoked.
#[derive(Clone)]
pub struct MenuPermissionResolver {
    guard: AuthorizationGuard,
    policy_store: PermissionPolicyStore,
}

impl MenuPermissionResolver {
    /// Creates a resolver from the guard and policy store.
    #[must_use]
    pub fn new(guard: AuthorizationGuard, policy_store: PermissionPolicyStore) -> Self {
        Self {
            guard,
            policy_store,
        }
    }

    /// Returns the visible resource keys in menu order.
    pub async fn resolve_menu(&self, actor_id: ActorId) -> AppResult<Vec<ResourceKey>> {
        let entries = self.policy_store.list_entries().await?;
        let mut visible = Vec::with_capacity(entries.len());

        for entry in entries {
            if self.guard.authorize(actor_id, &entry.role_set()).await {
                visible.push(entry.resource_key);
            }
        }

        debug!(%actor_id, visible = visible.len(), "menu resolved");
        Ok(visible)
    }
}
