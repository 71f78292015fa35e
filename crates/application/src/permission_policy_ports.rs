use async_trait::async_trait;

use assetdesk_core::AppResult;
use assetdesk_domain::{MenuPermission, ResourceKey, RoleSet};

/// Repository port for menu policy entries.
#[async_trait]
pub trait PermissionPolicyRepository: Send + Sync {
    /// Finds the entry for one resource key.
    async fn find_entry(&self, resource_key: &ResourceKey) -> AppResult<Option<MenuPermission>>;

    /// Lists all entries ordered by display order, then resource key.
    async fn list_entries(&self) -> AppResult<Vec<MenuPermission>>;

    /// Creates or replaces the entry for its resource key.
    async fn save_entry(&self, entry: MenuPermission) -> AppResult<()>;
}

/// Input payload for saving one menu policy entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveMenuPermissionInput {
    /// Protected resource.
    pub resource_key: ResourceKey,
    /// Position in resolved menus.
    pub display_order: i32,
    /// Roles allowed to reach the resource.
    pub roles: RoleSet,
}
