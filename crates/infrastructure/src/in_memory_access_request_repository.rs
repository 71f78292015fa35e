use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use assetdesk_application::{AccessRequestQuery, AccessRequestRepository};
use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{AccessRequest, AccessRequestId, AccessRequestStatus};

/// In-memory access request repository.
///
/// Decisions are applied under the write lock, which makes the pending check
/// and the update one atomic step.
#[derive(Debug, Default)]
pub struct InMemoryAccessRequestRepository {
    requests: RwLock<HashMap<AccessRequestId, AccessRequest>>,
}

impl InMemoryAccessRequestRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessRequestRepository for InMemoryAccessRequestRepository {
    async fn insert_request(&self, request: AccessRequest) -> AppResult<()> {
        let mut requests = self.requests.write().await;
        if requests.contains_key(&request.request_id) {
            return Err(AppError::Conflict(format!(
                "access request '{}' already exists",
                request.request_id
            )));
        }

        requests.insert(request.request_id, request);
        Ok(())
    }

    async fn find_request(&self, request_id: AccessRequestId) -> AppResult<Option<AccessRequest>> {
        Ok(self.requests.read().await.get(&request_id).cloned())
    }

    async fn list_requests(&self, query: AccessRequestQuery) -> AppResult<Vec<AccessRequest>> {
        let mut values: Vec<AccessRequest> = self
            .requests
            .read()
            .await
            .values()
            .filter(|request| query.status.is_none_or(|status| request.status == status))
            .cloned()
            .collect();
        values.sort_by(|left, right| {
            right
                .created_at
                .cmp(&left.created_at)
                .then_with(|| left.request_id.as_uuid().cmp(&right.request_id.as_uuid()))
        });

        Ok(values
            .into_iter()
            .skip(query.offset)
            .take(query.limit.clamp(1, 200))
            .collect())
    }

    async fn save_decision(&self, decided: &AccessRequest) -> AppResult<bool> {
        let mut requests = self.requests.write().await;
        let Some(stored) = requests
            .get_mut(&decided.request_id)
            .filter(|stored| stored.status == AccessRequestStatus::Pending)
        else {
            return Ok(false);
        };

        *stored = decided.clone();
        Ok(true)
    }

    async fn attach_actor(&self, request_id: AccessRequestId, actor_id: ActorId) -> AppResult<()> {
        let mut requests = self.requests.write().await;
        let Some(stored) = requests
            .get_mut(&request_id)
            .filter(|stored| stored.status == AccessRequestStatus::Approved)
        else {
            return Err(AppError::InvalidState(format!(
                "access request '{request_id}' is not approved"
            )));
        };

        stored.actor_id = Some(actor_id);
        Ok(())
    }

    async fn release_approval(&self, pending: &AccessRequest) -> AppResult<bool> {
        let mut requests = self.requests.write().await;
        let Some(stored) = requests.get_mut(&pending.request_id).filter(|stored| {
            stored.status == AccessRequestStatus::Approved && stored.actor_id.is_none()
        }) else {
            return Ok(false);
        };

        *stored = pending.clone();
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
