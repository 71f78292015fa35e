use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use assetdesk_application::PermissionPolicyRepository;
use assetdesk_core::{AppError, AppResult};
use assetdesk_domain::{MenuPermission, ResourceKey, Role};

/// PostgreSQL-backed menu policy repository.
#[derive(Clone)]
pub struct PostgresPermissionPolicyRepository {
    pool: PgPool,
}

impl PostgresPermissionPolicyRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuPermissionRow {
    resource_key: String,
    display_order: i32,
    roles: Vec<String>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MenuPermissionRow> for MenuPermission {
    type Error = AppError;

    fn try_from(row: MenuPermissionRow) -> Result<Self, Self::Error> {
        let corrupt =
            |error: AppError| AppError::Internal(format!("corrupt menu permission row: {error}"));

        MenuPermission::new(
            ResourceKey::new(row.resource_key).map_err(corrupt)?,
            row.display_order,
            Role::parse_set(row.roles.as_slice()).map_err(corrupt)?,
            row.updated_at,
        )
        .map_err(corrupt)
    }
}

#[async_trait]
impl PermissionPolicyRepository for PostgresPermissionPolicyRepository {
    async fn find_entry(&self, resource_key: &ResourceKey) -> AppResult<Option<MenuPermission>> {
        let row = sqlx::query_as::<_, MenuPermissionRow>(
            r#"
            SELECT resource_key, display_order, roles, updated_at
            FROM menu_permissions
            WHERE resource_key = $1
            "#,
        )
        .bind(resource_key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find menu permission: {error}"))
        })?;

        row.map(MenuPermission::try_from).transpose()
    }

    async fn list_entries(&self) -> AppResult<Vec<MenuPermission>> {
        let rows = sqlx::query_as::<_, MenuPermissionRow>(
            r#"
            SELECT resource_key, display_order, roles, updated_at
            FROM menu_permissions
            ORDER BY display_order, resource_key
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list menu permissions: {error}"))
        })?;

        rows.into_iter().map(MenuPermission::try_from).collect()
    }

    async fn save_entry(&self, entry: MenuPermission) -> AppResult<()> {
        let roles = entry
            .roles
            .iter()
            .map(|role| role.as_str().to_owned())
            .collect::<Vec<_>>();

        sqlx::query(
            r#"
            INSERT INTO menu_permissions (resource_key, display_order, roles, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (resource_key) DO UPDATE
            SET
                display_order = EXCLUDED.display_order,
                roles = EXCLUDED.roles,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(entry.resource_key.as_str())
        .bind(entry.display_order)
        .bind(roles)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to save menu permission: {error}"))
        })?;

        Ok(())
    }
}
