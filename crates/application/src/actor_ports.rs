use async_trait::async_trait;

use assetdesk_core::{ActorId, AppResult};
use assetdesk_domain::{Actor, EmailAddress};

/// Directory of known actors keyed by unique email.
#[async_trait]
pub trait ActorDirectory: Send + Sync {
    /// Returns the actor registered under the email, creating it when missing.
    ///
    /// Calling this twice with the same email must return the same actor.
    async fn resolve_or_create_by_email(
        &self,
        email: &EmailAddress,
        display_name: &str,
    ) -> AppResult<Actor>;

    /// Finds an actor by identifier.
    async fn find_actor(&self, actor_id: ActorId) -> AppResult<Option<Actor>>;
}
