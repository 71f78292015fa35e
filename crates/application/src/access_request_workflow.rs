use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{
    AccessDecision, AccessRequest, AccessRequestId, AuditAction, Operation, Role,
};

use crate::{
    AccessDecisionNotice, AccessDecisionNotifier, AccessRequestQuery, AccessRequestRepository,
    ActorDirectory, AuditEvent, AuditRepository, AuthorizationGuard, RoleAssignmentRegistry,
};

mod decisions;
mod submission;


const AUDIT_RESOURCE_TYPE: &str = "access_request";

/// Input payload for a public access request submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAccessRequestInput {
    /// Applicant name.
    pub name: String,
    /// Applicant email.
    pub email: String,
    /// Optional justification.
    pub description: Option<String>,
}

/// Lifecycle of access requests from submission to a terminal decision.
///
/// Decisions are applied with a compare-and-set on the pending status, so of
/// two concurrent decisions on one request exactly one succeeds and only the
/// winner grants a role.
#[derive(Clone)]
pub struct AccessRequestWorkflow {
    guard: AuthorizationGuard,
    repository: Arc<dyn AccessRequestRepository>,
    registry: RoleAssignmentRegistry,
    actor_directory: Arc<dyn ActorDirectory>,
    audit_repository: Arc<dyn AuditRepository>,
    notifier: Arc<dyn AccessDecisionNotifier>,
}

impl AccessRequestWorkflow {
    /// Creates a workflow from required dependencies.
    #[must_use]
    pub fn new(
        guard: AuthorizationGuard,
        repository: Arc<dyn AccessRequestRepository>,
        registry: RoleAssignmentRegistry,
        actor_directory: Arc<dyn ActorDirectory>,
        audit_repository: Arc<dyn AuditRepository>,
        notifier: Arc<dyn AccessDecisionNotifier>,
    ) -> Self {
        Self {
            guard,
            repository,
            registry,
            actor_directory,
            audit_repository,
            notifier,
        }
    }

    /// Returns one request.
    pub async fn find(
        &self,
        actor_id: ActorId,
        request_id: AccessRequestId,
    ) -> AppResult<AccessRequest> {
        self.guard
            .require(actor_id, Operation::ViewAccessRequest)
            .await?;

        self.load(request_id).await
    }

    /// Lists requests newest first.
    pub async fn list(
        &self,
        actor_id: ActorId,
        query: AccessRequestQuery,
    ) -> AppResult<Vec<AccessRequest>> {
        self.guard
            .require(actor_id, Operation::ListAccessRequests)
            .await?;

        self.repository.list_requests(query).await
    }

    async fn load(&self, request_id: AccessRequestId) -> AppResult<AccessRequest> {
        self.repository
            .find_request(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("access request '{request_id}' not found")))
    }
}
