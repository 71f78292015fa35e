use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use assetdesk_application::{AccessRequestQuery, AccessRequestRepository};
use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{
    AccessRequest, AccessRequestId, AccessRequestStatus, EmailAddress, Role,
};


const SELECT_COLUMNS: &str = r#"
    id, name, email, description, status, assigned_role, actor_id, decided_by,
    decision_note, created_at, updated_at
"#;

/// PostgreSQL-backed repository for access requests.
#[derive(Clone)]
pub struct PostgresAccessRequestRepository {
    pool: PgPool,
}

impl PostgresAccessRequestRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccessRequestRow {
    id: Uuid,
    name: String,
    email: String,
    description: Option<String>,
    status: String,
    assigned_role: Option<String>,
    actor_id: Option<Uuid>,
    decided_by: Option<Uuid>,
    decision_note: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccessRequestRow> for AccessRequest {
    type Error = AppError;

    fn try_from(row: AccessRequestRow) -> Result<Self, Self::Error> {
        let corrupt =
            |error: AppError| AppError::Internal(format!("corrupt access request row: {error}"));

        Ok(Self {
            request_id: AccessRequestId::from_uuid(row.id),
            name: row.name,
            email: EmailAddress::new(row.email).map_err(corrupt)?,
            description: row.description,
            status: AccessRequestStatus::from_transport(row.status.as_str()).map_err(corrupt)?,
            assigned_role: row
                .assigned_role
                .as_deref()
                .map(Role::from_transport)
                .transpose()
                .map_err(corrupt)?,
            actor_id: row.actor_id.map(ActorId::from_uuid),
            decided_by: row.decided_by.map(ActorId::from_uuid),
            decision_note: row.decision_note,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AccessRequestRepository for PostgresAccessRequestRepository {
    async fn insert_request(&self, request: AccessRequest) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO access_requests (
                id, name, email, description, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(request.request_id.as_uuid())
        .bind(request.name.as_str())
        .bind(request.email.as_str())
        .bind(request.description.as_deref())
        .bind(request.status.as_str())
        .bind(request.created_at)
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to insert access request: {error}"))
        })?;

        Ok(())
    }

    async fn find_request(&self, request_id: AccessRequestId) -> AppResult<Option<AccessRequest>> {
        let row = sqlx::query_as::<_, AccessRequestRow>(
            format!("SELECT {SELECT_COLUMNS} FROM access_requests WHERE id = $1").as_str(),
        )
        .bind(request_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find access request: {error}")))?;

        row.map(AccessRequest::try_from).transpose()
    }

    async fn list_requests(&self, query: AccessRequestQuery) -> AppResult<Vec<AccessRequest>> {
        let capped_limit = query.limit.clamp(1, 200) as i64;
        let capped_offset = query.offset.min(10_000) as i64;
        let rows = sqlx::query_as::<_, AccessRequestRow>(
            format!(
                r#"
                SELECT {SELECT_COLUMNS}
                FROM access_requests
                WHERE ($1::TEXT IS NULL OR status = $1)
                ORDER BY created_at DESC, id
                LIMIT $2
                OFFSET $3
                "#
            )
            .as_str(),
        )
        .bind(query.status.map(|status| status.as_str()))
        .bind(capped_limit)
        .bind(capped_offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list access requests: {error}")))?;

        rows.into_iter().map(AccessRequest::try_from).collect()
    }

    async fn save_decision(&self, decided: &AccessRequest) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE access_requests
            SET
                status = $2,
                assigned_role = $3,
                actor_id = $4,
                decided_by = $5,
                decision_note = $6,
                updated_at = $7
            WHERE id = $1 AND status = 'PENDING'
            "#,
        )
        .bind(decided.request_id.as_uuid())
        .bind(decided.status.as_str())
        .bind(decided.assigned_role.map(|role| role.as_str()))
        .bind(decided.actor_id.map(|actor_id| actor_id.as_uuid()))
        .bind(decided.decided_by.map(|actor_id| actor_id.as_uuid()))
        .bind(decided.decision_note.as_deref())
        .bind(decided.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to store access request decision: {error}"))
        })?;

        Ok(result.rows_affected() == 1)
    }

    async fn attach_actor(&self, request_id: AccessRequestId, actor_id: ActorId) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE access_requests
            SET actor_id = $2
            WHERE id = $1 AND status = 'APPROVED'
            "#,
        )
        .bind(request_id.as_uuid())
        .bind(actor_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to attach actor to access request: {error}"))
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::InvalidState(format!(
                "access request '{request_id}' is not approved"
            )));
        }

        Ok(())
    }

    async fn release_approval(&self, pending: &AccessRequest) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE access_requests
            SET
                status = 'PENDING',
                assigned_role = NULL,
                actor_id = NULL,
                decided_by = NULL,
                decision_note = NULL,
                updated_at = $2
            WHERE id = $1 AND status = 'APPROVED' AND actor_id IS NULL
            "#,
        )
        .bind(pending.request_id.as_uuid())
        .bind(pending.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to release access request approval: {error}"))
        })?;

        Ok(result.rows_affected() == 1)
    }
}
