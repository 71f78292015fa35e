//! AssetDesk API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod middleware;
mod startup_seed;
mod state;

#[cfg(test)]
mod test_support;

use assetdesk_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, StorageBackend};
use crate::api_services::RepositorySet;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    api_config::init_tracing();

    let config = ApiConfig::load()?;

    let repositories = match (&config.database_url, config.storage_backend) {
        (Some(database_url), _) if config.migrate_only => {
            api_services::connect_and_migrate(database_url).await?;
            info!("database migrations applied successfully");
            return Ok(());
        }
        (Some(database_url), StorageBackend::Postgres) => {
            let pool = api_services::connect_and_migrate(database_url).await?;
            RepositorySet::postgres(&pool)
        }
        (None, StorageBackend::Postgres) => {
            return Err(AppError::Validation("DATABASE_URL is required".to_owned()));
        }
        (_, StorageBackend::Memory) => {
            info!("using in-memory storage; data is lost on restart");
            RepositorySet::in_memory()
        }
    };

    let app_state = api_services::build_app_state(repositories, &config)?;

    if config.seed_default_menu {
        startup_seed::seed_default_menu(&app_state).await?;
    }
    if let Some(email) = &config.bootstrap_admin_email {
        startup_seed::ensure_bootstrap_admin(&app_state, email).await?;
    }

    let app = api_router::build_router(app_state, config.frontend_url.as_str())?;

    let address = config.socket_address()?;
    info!(%address, "api listening");

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind API listener: {error}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server failed: {error}")))
}
