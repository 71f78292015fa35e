use async_trait::async_trait;

use assetdesk_core::{ActorId, AppResult};
use assetdesk_domain::{AccessRequest, AccessRequestId, AccessRequestStatus};

/// Query parameters for access request listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequestQuery {
    /// Optional status filter.
    pub status: Option<AccessRequestStatus>,
    /// Maximum rows returned.
    pub limit: usize,
    /// Number of rows skipped for offset pagination.
    pub offset: usize,
}

/// Repository port for access request records.
#[async_trait]
pub trait AccessRequestRepository: Send + Sync {
    /// Persists a newly submitted request.
    async fn insert_request(&self, request: AccessRequest) -> AppResult<()>;

    /// Finds a request by identifier.
    async fn find_request(&self, request_id: AccessRequestId) -> AppResult<Option<AccessRequest>>;

    /// Lists requests newest first.
    async fn list_requests(&self, query: AccessRequestQuery) -> AppResult<Vec<AccessRequest>>;

    /// Stores a decided request only if the stored record is still pending.
    ///
    /// This is a single atomic compare-and-set. Returns `false` when another
    /// decision was stored first or the request vanished.
    async fn save_decision(&self, decided: &AccessRequest) -> AppResult<bool>;

    /// Records the applicant actor on an approved request.
    async fn attach_actor(&self, request_id: AccessRequestId, actor_id: ActorId) -> AppResult<()>;

    /// Restores `pending` over an approval that never got its actor attached.
    ///
    /// Returns `false` when the stored record is not such an approval.
    async fn release_approval(&self, pending: &AccessRequest) -> AppResult<bool>;
}
