use assetdesk_core::ActorIdentity;
use assetdesk_domain::{ResourceKey, RoleSet};
use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
}

/// API representation of the authenticated actor.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/actor-profile-response.ts"
)]
pub struct ActorProfileResponse {
    pub actor_id: String,
    pub display_name: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl ActorProfileResponse {
    /// Creates a response from the identity and the roles it currently holds.
    #[must_use]
    pub fn from_identity_with_roles(identity: &ActorIdentity, roles: RoleSet) -> Self {
        Self {
            actor_id: identity.actor_id().to_string(),
            display_name: identity.display_name().to_owned(),
            email: identity.email().to_owned(),
            roles: roles.iter().map(|role| role.as_str().to_owned()).collect(),
        }
    }
}

/// Resource keys the authenticated actor may open, in menu order.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/menu-response.ts"
)]
pub struct MenuResponse {
    pub resource_keys: Vec<String>,
}

impl From<Vec<ResourceKey>> for MenuResponse {
    fn from(value: Vec<ResourceKey>) -> Self {
        Self {
            resource_keys: value
                .into_iter()
                .map(|key| key.as_str().to_owned())
                .collect(),
        }
    }
}
