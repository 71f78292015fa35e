use assetdesk_domain::AccessRequest;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for a public access request.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/submit-access-request-request.ts"
)]
pub struct SubmitAccessRequestRequest {
    pub name: String,
    pub email: String,
    pub description: Option<String>,
}

/// Incoming payload for approving a request.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/approve-access-request-request.ts"
)]
pub struct ApproveAccessRequestRequest {
    pub role: String,
}

/// Incoming payload for rejecting a request.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/reject-access-request-request.ts"
)]
pub struct RejectAccessRequestRequest {
    pub reason: Option<String>,
}

/// API representation of an access request.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-request-response.ts"
)]
pub struct AccessRequestResponse {
    pub request_id: String,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub status: String,
    pub assigned_role: Option<String>,
    pub actor_id: Option<String>,
    pub decided_by: Option<String>,
    pub decision_note: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AccessRequest> for AccessRequestResponse {
    fn from(value: AccessRequest) -> Self {
        Self {
            request_id: value.request_id.to_string(),
            name: value.name,
            email: value.email.as_str().to_owned(),
            description: value.description,
            status: value.status.as_str().to_owned(),
            assigned_role: value.assigned_role.map(|role| role.as_str().to_owned()),
            actor_id: value.actor_id.map(|actor_id| actor_id.to_string()),
            decided_by: value.decided_by.map(|actor_id| actor_id.to_string()),
            decision_note: value.decision_note,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}
