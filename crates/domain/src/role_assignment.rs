use assetdesk_core::ActorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Role;

/// Durable link between one actor and one role.
///
/// At most one record exists per `(actor_id, role)`. Revocation flips
/// `is_active` to `false`; records are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Stable record identifier.
    pub assignment_id: Uuid,
    /// Actor holding the role.
    pub actor_id: ActorId,
    /// Granted role.
    pub role: Role,
    /// Whether the assignment currently confers the role.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last activation or deactivation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl RoleAssignment {
    /// Creates a new active assignment.
    #[must_use]
    pub fn activate_new(actor_id: ActorId, role: Role, now: DateTime<Utc>) -> Self {
        Self {
            assignment_id: Uuid::new_v4(),
            actor_id,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
