//! In-memory application state for handler and middleware tests.

use assetdesk_core::ActorIdentity;
use assetdesk_domain::{EmailAddress, Role};
use axum::http::HeaderName;

use crate::api_config::{ApiConfig, EmailProviderConfig, StorageBackend};
use crate::api_services::{RepositorySet, build_app_state};
use crate::state::AppState;

pub(crate) fn test_config() -> ApiConfig {
    ApiConfig {
        migrate_only: false,
        storage_backend: StorageBackend::Memory,
        database_url: None,
        frontend_url: "http://localhost:3000".to_owned(),
        api_host: "127.0.0.1".to_owned(),
        api_port: 3001,
        actor_header: HeaderName::from_static("x-actor-id"),
        bootstrap_admin_email: None,
        seed_default_menu: true,
        email_provider: EmailProviderConfig::Console,
    }
}

pub(crate) fn memory_state() -> AppState {
    match build_app_state(RepositorySet::in_memory(), &test_config()) {
        Ok(state) => state,
        Err(error) => panic!("failed to build state: {error}"),
    }
}

pub(crate) async fn seed_actor(state: &AppState, email: &str, roles: &[Role]) -> ActorIdentity {
    let email = match EmailAddress::new(email) {
        Ok(email) => email,
        Err(error) => panic!("invalid test email: {error}"),
    };
    let actor = match state
        .actor_directory
        .resolve_or_create_by_email(&email, email.as_str())
        .await
    {
        Ok(actor) => actor,
        Err(error) => panic!("failed to seed actor: {error}"),
    };

    for role in roles {
        if let Err(error) = state.role_assignment_registry.grant(actor.actor_id, *role).await {
            panic!("failed to grant {role}: {error}");
        }
    }

    actor.identity()
}
