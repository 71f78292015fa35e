use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use assetdesk_application::PermissionPolicyRepository;
use assetdesk_core::AppResult;
use assetdesk_domain::{MenuPermission, ResourceKey};

/// In-memory menu policy repository.
#[derive(Debug, Default)]
pub struct InMemoryPermissionPolicyRepository {
    entries: RwLock<HashMap<ResourceKey, MenuPermission>>,
}

impl InMemoryPermissionPolicyRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PermissionPolicyRepository for InMemoryPermissionPolicyRepository {
    async fn find_entry(&self, resource_key: &ResourceKey) -> AppResult<Option<MenuPermission>> {
        Ok(self.entries.read().await.get(resource_key).cloned())
    }

    async fn list_entries(&self) -> AppResult<Vec<MenuPermission>> {
        let mut values: Vec<MenuPermission> = self.entries.read().await.values().cloned().collect();
        values.sort_by(|left, right| {
            left.display_order
                .cmp(&right.display_order)
                .then_with(|| left.resource_key.cmp(&right.resource_key))
        });
        Ok(values)
    }

    async fn save_entry(&self, entry: MenuPermission) -> AppResult<()> {
        self.entries
            .write()
            .await
            .insert(entry.resource_key.clone(), entry);
        Ok(())
    }
}
