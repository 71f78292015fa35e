use serde::{Deserialize, Serialize};

use crate::ActorId;

/// Authenticated actor attached to an inbound request by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorIdentity {
    actor_id: ActorId,
    display_name: String,
    email: String,
}

impl ActorIdentity {
    /// Creates an actor identity from directory data.
    #[must_use]
    pub fn new(actor_id: ActorId, display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            actor_id,
            display_name: display_name.into(),
            email: email.into(),
        }
    }

    /// Returns the stable actor identifier.
    #[must_use]
    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    /// Returns the display name for the current actor.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the actor's unique email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
