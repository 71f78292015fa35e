use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use assetdesk_application::ActorDirectory;
use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{Actor, EmailAddress};

/// PostgreSQL-backed actor directory keyed by unique email.
#[derive(Clone)]
pub struct PostgresActorDirectory {
    pool: PgPool,
}

impl PostgresActorDirectory {
    /// Creates a directory with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActorRow {
    id: Uuid,
    email: String,
    display_name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActorRow> for Actor {
    type Error = AppError;

    fn try_from(row: ActorRow) -> Result<Self, Self::Error> {
        Ok(Self {
            actor_id: ActorId::from_uuid(row.id),
            email: EmailAddress::new(row.email)
                .map_err(|error| AppError::Internal(format!("corrupt actor row: {error}")))?,
            display_name: row.display_name,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ActorDirectory for PostgresActorDirectory {
    async fn resolve_or_create_by_email(
        &self,
        email: &EmailAddress,
        display_name: &str,
    ) -> AppResult<Actor> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let row = sqlx::query_as::<_, ActorRow>(
            r#"
            INSERT INTO actors (id, email, display_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
            RETURNING id, email, display_name, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email.as_str())
        .bind(display_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to resolve actor: {error}")))?;

        Actor::try_from(row)
    }

    async fn find_actor(&self, actor_id: ActorId) -> AppResult<Option<Actor>> {
        let row = sqlx::query_as::<_, ActorRow>(
            r#"
            SELECT id, email, display_name, created_at
            FROM actors
            WHERE id = $1
            "#,
        )
        .bind(actor_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find actor: {error}")))?;

        row.map(Actor::try_from).transpose()
    }
}
