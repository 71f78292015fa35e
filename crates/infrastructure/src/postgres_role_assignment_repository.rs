use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use assetdesk_application::RoleAssignmentRepository;
use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{Role, RoleAssignment};


/// PostgreSQL-backed repository for role assignments.
///
/// Uniqueness of `(user_id, role_key)` is enforced by a table constraint.
#[derive(Clone)]
pub struct PostgresRoleAssignmentRepository {
    pool: PgPool,
}

impl PostgresRoleAssignmentRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleAssignmentRow {
    id: Uuid,
    user_id: Uuid,
    role_key: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RoleAssignmentRow> for RoleAssignment {
    type Error = AppError;

    fn try_from(row: RoleAssignmentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            assignment_id: row.id,
            actor_id: ActorId::from_uuid(row.user_id),
            role: parse_stored_role(row.role_key.as_str())?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl RoleAssignmentRepository for PostgresRoleAssignmentRepository {
    async fn find_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
    ) -> AppResult<Option<RoleAssignment>> {
        let row = sqlx::query_as::<_, RoleAssignmentRow>(
            r#"
            SELECT id, user_id, role_key, is_active, created_at, updated_at
            FROM role_assignments
            WHERE user_id = $1 AND role_key = $2
            "#,
        )
        .bind(actor_id.as_uuid())
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find role assignment: {error}")))?;

        row.map(RoleAssignment::try_from).transpose()
    }

    async fn insert_assignment(&self, assignment: RoleAssignment) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO role_assignments (id, user_id, role_key, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(assignment.assignment_id)
        .bind(assignment.actor_id.as_uuid())
        .bind(assignment.role.as_str())
        .bind(assignment.is_active)
        .bind(assignment.created_at)
        .bind(assignment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|error| map_assignment_conflict(error, &assignment))?;

        Ok(())
    }

    async fn reactivate_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleAssignment>> {
        let row = sqlx::query_as::<_, RoleAssignmentRow>(
            r#"
            UPDATE role_assignments
            SET is_active = TRUE, updated_at = $3
            WHERE user_id = $1 AND role_key = $2 AND is_active = FALSE
            RETURNING id, user_id, role_key, is_active, created_at, updated_at
            "#,
        )
        .bind(actor_id.as_uuid())
        .bind(role.as_str())
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to reactivate role assignment: {error}"))
        })?;

        row.map(RoleAssignment::try_from).transpose()
    }

    async fn deactivate_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE role_assignments
            SET is_active = FALSE, updated_at = $3
            WHERE user_id = $1 AND role_key = $2 AND is_active = TRUE
            "#,
        )
        .bind(actor_id.as_uuid())
        .bind(role.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to deactivate role assignment: {error}"))
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_active_roles(&self, actor_id: ActorId) -> AppResult<Vec<Role>> {
        let role_keys = sqlx::query_scalar::<_, String>(
            r#"
            SELECT role_key
            FROM role_assignments
            WHERE user_id = $1 AND is_active = TRUE
            "#,
        )
        .bind(actor_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list actor roles: {error}")))?;

        role_keys
            .iter()
            .map(|role_key| parse_stored_role(role_key.as_str()))
            .collect()
    }

    async fn list_assignments(
        &self,
        actor_id: Option<ActorId>,
    ) -> AppResult<Vec<RoleAssignment>> {
        let rows = sqlx::query_as::<_, RoleAssignmentRow>(
            r#"
            SELECT id, user_id, role_key, is_active, created_at, updated_at
            FROM role_assignments
            WHERE ($1::UUID IS NULL OR user_id = $1)
            ORDER BY created_at, role_key
            "#,
        )
        .bind(actor_id.map(|actor_id| actor_id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list role assignments: {error}"))
        })?;

        rows.into_iter().map(RoleAssignment::try_from).collect()
    }
}

fn parse_stored_role(value: &str) -> AppResult<Role> {
    Role::from_transport(value)
        .map_err(|error| AppError::Internal(format!("corrupt role assignment row: {error}")))
}

fn map_assignment_conflict(error: sqlx::Error, assignment: &RoleAssignment) -> AppError {
    if let sqlx::Error::Database(database_error) = &error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict(format!(
            "actor '{}' already has an assignment for role '{}'",
            assignment.actor_id,
            assignment.role.as_str()
        ));
    }

    AppError::Internal(format!("failed to insert role assignment: {error}"))
}
