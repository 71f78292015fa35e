//! Hand-written fakes shared by the service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use assetdesk_core::{ActorId, AppError, AppResult};
use assetdesk_domain::{
    AccessRequest, AccessRequestId, AccessRequestStatus, Actor, EmailAddress, MenuPermission,
    ResourceKey, Role, RoleAssignment,
};

use crate::{
    AccessDecisionNotice, AccessDecisionNotifier, AccessRequestQuery, AccessRequestRepository,
    ActorDirectory, AuditEvent, AuditRepository, PermissionPolicyRepository,
    RoleAssignmentRepository,
};

#[derive(Default)]
pub(crate) struct FakeRoleAssignmentRepository {
    pub(crate) assignments: Mutex<Vec<RoleAssignment>>,
    /// Fails the next insert with an internal error, then recovers.
    pub(crate) fail_next_insert: AtomicBool,
}

#[async_trait]
impl RoleAssignmentRepository for FakeRoleAssignmentRepository {
    async fn find_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
    ) -> AppResult<Option<RoleAssignment>> {
        Ok(self
            .assignments
            .lock()
            .await
            .iter()
            .find(|stored| stored.actor_id == actor_id && stored.role == role)
            .cloned())
    }

    async fn insert_assignment(&self, assignment: RoleAssignment) -> AppResult<()> {
        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(AppError::Internal("storage offline".to_owned()));
        }
        let mut assignments = self.assignments.lock().await;
        if assignments
            .iter()
            .any(|stored| stored.actor_id == assignment.actor_id && stored.role == assignment.role)
        {
            return Err(AppError::Conflict("duplicate assignment".to_owned()));
        }
        assignments.push(assignment);
        Ok(())
    }

    async fn reactivate_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleAssignment>> {
        let mut assignments = self.assignments.lock().await;
        let Some(stored) = assignments.iter_mut().find(|stored| {
            stored.actor_id == actor_id && stored.role == role && !stored.is_active
        }) else {
            return Ok(None);
        };
        stored.is_active = true;
        stored.updated_at = now;
        Ok(Some(stored.clone()))
    }

    async fn deactivate_assignment(
        &self,
        actor_id: ActorId,
        role: Role,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut assignments = self.assignments.lock().await;
        let Some(stored) = assignments.iter_mut().find(|stored| {
            stored.actor_id == actor_id && stored.role == role && stored.is_active
        }) else {
            return Ok(false);
        };
        stored.is_active = false;
        stored.updated_at = now;
        Ok(true)
    }

    async fn list_active_roles(&self, actor_id: ActorId) -> AppResult<Vec<Role>> {
        Ok(self
            .assignments
            .lock()
            .await
            .iter()
            .filter(|stored| stored.actor_id == actor_id && stored.is_active)
            .map(|stored| stored.role)
            .collect())
    }

    async fn list_assignments(
        &self,
        actor_id: Option<ActorId>,
    ) -> AppResult<Vec<RoleAssignment>> {
        Ok(self
            .assignments
            .lock()
            .await
            .iter()
            .filter(|stored| actor_id.is_none_or(|actor_id| stored.actor_id == actor_id))
            .cloned()
            .collect())
    }
}

/// Repository that fails every call, for fail-closed checks.
pub(crate) struct FailingRoleAssignmentRepository;

#[async_trait]
impl RoleAssignmentRepository for FailingRoleAssignmentRepository {
    async fn find_assignment(
        &self,
        _actor_id: ActorId,
        _role: Role,
    ) -> AppResult<Option<RoleAssignment>> {
        Err(AppError::Internal("storage offline".to_owned()))
    }

    async fn insert_assignment(&self, _assignment: RoleAssignment) -> AppResult<()> {
        Err(AppError::Internal("storage offline".to_owned()))
    }

    async fn reactivate_assignment(
        &self,
        _actor_id: ActorId,
        _role: Role,
        _now: DateTime<Utc>,
    ) -> AppResult<Option<RoleAssignment>> {
        Err(AppError::Internal("storage offline".to_owned()))
    }

    async fn deactivate_assignment(
        &self,
        _actor_id: ActorId,
        _role: Role,
        _now: DateTime<Utc>,
    ) -> AppResult<bool> {
        Err(AppError::Internal("storage offline".to_owned()))
    }

    async fn list_active_roles(&self, _actor_id: ActorId) -> AppResult<Vec<Role>> {
        Err(AppError::Internal("storage offline".to_owned()))
    }

    async fn list_assignments(
        &self,
        _actor_id: Option<ActorId>,
    ) -> AppResult<Vec<RoleAssignment>> {
        Err(AppError::Internal("storage offline".to_owned()))
    }
}

#[derive(Default)]
pub(crate) struct FakePermissionPolicyRepository {
    pub(crate) entries: Mutex<HashMap<ResourceKey, MenuPermission>>,
}

#[async_trait]
impl PermissionPolicyRepository for FakePermissionPolicyRepository {
    async fn find_entry(&self, resource_key: &ResourceKey) -> AppResult<Option<MenuPermission>> {
        Ok(self.entries.lock().await.get(resource_key).cloned())
    }

    async fn list_entries(&self) -> AppResult<Vec<MenuPermission>> {
        let mut entries: Vec<MenuPermission> =
            self.entries.lock().await.values().cloned().collect();
        entries.sort_by(|left, right| {
            left.display_order
                .cmp(&right.display_order)
                .then_with(|| left.resource_key.cmp(&right.resource_key))
        });
        Ok(entries)
    }

    async fn save_entry(&self, entry: MenuPermission) -> AppResult<()> {
        self.entries
            .lock()
            .await
            .insert(entry.resource_key.clone(), entry);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeAccessRequestRepository {
    pub(crate) requests: Mutex<HashMap<AccessRequestId, AccessRequest>>,
}

#[async_trait]
impl AccessRequestRepository for FakeAccessRequestRepository {
    async fn insert_request(&self, request: AccessRequest) -> AppResult<()> {
        self.requests
            .lock()
            .await
            .insert(request.request_id, request);
        Ok(())
    }

    async fn find_request(&self, request_id: AccessRequestId) -> AppResult<Option<AccessRequest>> {
        Ok(self.requests.lock().await.get(&request_id).cloned())
    }

    async fn list_requests(&self, query: AccessRequestQuery) -> AppResult<Vec<AccessRequest>> {
        let mut requests: Vec<AccessRequest> = self
            .requests
            .lock()
            .await
            .values()
            .filter(|request| query.status.is_none_or(|status| request.status == status))
            .cloned()
            .collect();
        requests.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        Ok(requests
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect())
    }

    async fn save_decision(&self, decided: &AccessRequest) -> AppResult<bool> {
        let mut requests = self.requests.lock().await;
        let Some(stored) = requests.get_mut(&decided.request_id) else {
            return Ok(false);
        };
        if stored.status != AccessRequestStatus::Pending {
            return Ok(false);
        }
        *stored = decided.clone();
        Ok(true)
    }

    async fn attach_actor(&self, request_id: AccessRequestId, actor_id: ActorId) -> AppResult<()> {
        let mut requests = self.requests.lock().await;
        match requests.get_mut(&request_id) {
            Some(stored) if stored.status == AccessRequestStatus::Approved => {
                stored.actor_id = Some(actor_id);
                Ok(())
            }
            _ => Err(AppError::InvalidState("request is not approved".to_owned())),
        }
    }

    async fn release_approval(&self, pending: &AccessRequest) -> AppResult<bool> {
        let mut requests = self.requests.lock().await;
        let Some(stored) = requests.get_mut(&pending.request_id) else {
            return Ok(false);
        };
        if stored.status != AccessRequestStatus::Approved || stored.actor_id.is_some() {
            return Ok(false);
        }
        *stored = pending.clone();
        Ok(true)
    }
}

#[derive(Default)]
pub(crate) struct FakeActorDirectory {
    pub(crate) actors: Mutex<Vec<Actor>>,
}

impl FakeActorDirectory {
    pub(crate) async fn seed(&self, email: &str, display_name: &str) -> Actor {
        match self
            .resolve_or_create_by_email(&email_address(email), display_name)
            .await
        {
            Ok(actor) => actor,
            Err(error) => panic!("failed to seed actor: {error}"),
        }
    }
}

#[async_trait]
impl ActorDirectory for FakeActorDirectory {
    async fn resolve_or_create_by_email(
        &self,
        email: &EmailAddress,
        display_name: &str,
    ) -> AppResult<Actor> {
        let mut actors = self.actors.lock().await;
        if let Some(existing) = actors.iter().find(|actor| &actor.email == email) {
            return Ok(existing.clone());
        }
        let actor = Actor {
            actor_id: ActorId::new(),
            email: email.clone(),
            display_name: display_name.to_owned(),
            created_at: Utc::now(),
        };
        actors.push(actor.clone());
        Ok(actor)
    }

    async fn find_actor(&self, actor_id: ActorId) -> AppResult<Option<Actor>> {
        Ok(self
            .actors
            .lock()
            .await
            .iter()
            .find(|actor| actor.actor_id == actor_id)
            .cloned())
    }
}

#[derive(Default)]
pub(crate) struct FakeAuditRepository {
    pub(crate) events: Mutex<Vec<AuditEvent>>,
}

#[async_trait]
impl AuditRepository for FakeAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeNotifier {
    pub(crate) notices: Mutex<Vec<AccessDecisionNotice>>,
    pub(crate) fail: bool,
}

#[async_trait]
impl AccessDecisionNotifier for FakeNotifier {
    async fn notify(&self, notice: AccessDecisionNotice) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Internal("mail relay unavailable".to_owned()));
        }
        self.notices.lock().await.push(notice);
        Ok(())
    }
}

pub(crate) fn email_address(value: &str) -> EmailAddress {
    match EmailAddress::new(value) {
        Ok(email) => email,
        Err(error) => panic!("invalid test email '{value}': {error}"),
    }
}

pub(crate) fn resource_key(value: &str) -> ResourceKey {
    match ResourceKey::new(value) {
        Ok(key) => key,
        Err(error) => panic!("invalid test resource key '{value}': {error}"),
    }
}
