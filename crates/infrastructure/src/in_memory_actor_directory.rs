use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use assetdesk_application::ActorDirectory;
use assetdesk_core::{ActorId, AppResult};
use assetdesk_domain::{Actor, EmailAddress};

/// In-memory actor directory keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryActorDirectory {
    actors: RwLock<HashMap<EmailAddress, Actor>>,
}

impl InMemoryActorDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActorDirectory for InMemoryActorDirectory {
    async fn resolve_or_create_by_email(
        &self,
        email: &EmailAddress,
        display_name: &str,
    ) -> AppResult<Actor> {
        let mut actors = self.actors.write().await;
        let actor = actors.entry(email.clone()).or_insert_with(|| Actor {
            actor_id: ActorId::new(),
            email: email.clone(),
            display_name: display_name.to_owned(),
            created_at: Utc::now(),
        });

        Ok(actor.clone())
    }

    async fn find_actor(&self, actor_id: ActorId) -> AppResult<Option<Actor>> {
        Ok(self
            .actors
            .read()
            .await
            .values()
            .find(|actor| actor.actor_id == actor_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use assetdesk_application::ActorDirectory;
    use assetdesk_domain::EmailAddress;

    use super::InMemoryActorDirectory;

    #[tokio::test]
    async fn resolving_twice_returns_the_same_actor() {
        let directory = InMemoryActorDirectory::new();
        let Ok(email) = EmailAddress::new("Dana@Example.com") else {
            panic!("valid email rejected");
        };

        let first = directory.resolve_or_create_by_email(&email, "Dana").await;
        let second = directory
            .resolve_or_create_by_email(&email, "Dana W.")
            .await;

        match (first, second) {
            (Ok(first), Ok(second)) => {
                assert_eq!(first.actor_id, second.actor_id);
                assert_eq!(second.display_name, "Dana");
                let found = directory.find_actor(first.actor_id).await;
                assert!(matches!(found, Ok(Some(actor)) if actor.email == email));
            }
            other => panic!("resolution failed: {other:?}"),
        }
    }
}
