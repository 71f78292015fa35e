//! Shared helpers for PostgreSQL adapter tests. Tests skip when
//! `DATABASE_URL` is unset.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use assetdesk_core::ActorId;

use crate::MIGRATOR;

pub(crate) async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(4)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres adapter tests: {error}");
    }

    Some(pool)
}

pub(crate) async fn insert_actor(pool: &PgPool) -> ActorId {
    let actor_id = Uuid::new_v4();
    let insert = sqlx::query(
        r#"
        INSERT INTO actors (id, email, display_name)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(actor_id)
    .bind(format!("actor-{actor_id}@assetdesk.test"))
    .bind("Test Actor")
    .execute(pool)
    .await;
    assert!(insert.is_ok());

    ActorId::from_uuid(actor_id)
}
