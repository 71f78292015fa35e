use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use assetdesk_core::AppResult;
use assetdesk_domain::{MenuPermission, ResourceKey, RoleSet};

use crate::{PermissionPolicyRepository, SaveMenuPermissionInput};


/// Read and administrative access to the menu policy.
///
/// Unconfigured resource keys resolve to an empty allow-list, which the
/// authorization guard treats as deny-all for menu resolution.
#[derive(Clone)]
pub struct PermissionPolicyStore {
    repository: Arc<dyn PermissionPolicyRepository>,
}

impl PermissionPolicyStore {
    /// Creates a store from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn PermissionPolicyRepository>) -> Self {
        Self { repository }
    }

    /// Returns the roles allowed to reach a resource.
    pub async fn roles_allowed_for(&self, resource_key: &ResourceKey) -> AppResult<RoleSet> {
        Ok(self
            .repository
            .find_entry(resource_key)
            .await?
            .map(|entry| entry.role_set())
            .unwrap_or_default())
    }

    /// Lists configured entries in menu order.
    pub async fn list_entries(&self) -> AppResult<Vec<MenuPermission>> {
        self.repository.list_entries().await
    }

    /// Validates and stores an entry, replacing any previous one for the key.
    pub async fn save_entry(&self, input: SaveMenuPermissionInput) -> AppResult<MenuPermission> {
        let entry = MenuPermission::new(
            input.resource_key,
            input.display_order,
            input.roles,
            Utc::now(),
        )?;

        self.repository.save_entry(entry.clone()).await?;

        info!(
            resource_key = entry.resource_key.as_str(),
            roles = ?entry.roles,
            "menu permission saved"
        );

        Ok(entry)
    }
}
