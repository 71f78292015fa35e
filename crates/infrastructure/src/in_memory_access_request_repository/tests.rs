use assetdesk_application::{AccessRequestQuery, AccessRequestRepository};
use assetdesk_core::{ActorId, AppError};
use assetdesk_domain::{AccessDecision, AccessRequest, AccessRequestStatus, Role};
use chrono::{Duration, Utc};

use super::InMemoryAccessRequestRepository;

fn submitted(offset_seconds: i64) -> AccessRequest {
    let created_at = Utc::now() + Duration::seconds(offset_seconds);
    match AccessRequest::submit("Dana", "dana@example.com", None, created_at) {
        Ok(request) => request,
        Err(error) => panic!("invalid test request: {error}"),
    }
}

fn approved(request: &AccessRequest) -> AccessRequest {
    let decision = AccessDecision::Approve {
        decided_by: ActorId::new(),
        role: Role::User,
    };
    match request.decide(decision, Utc::now()) {
        Ok(decided) => decided,
        Err(error) => panic!("pending request must accept approval: {error}"),
    }
}

#[tokio::test]
async fn listing_clamps_limit_to_page_bounds() {
    let repository = InMemoryAccessRequestRepository::new();
    for offset in 0..205 {
        assert!(repository.insert_request(submitted(offset)).await.is_ok());
    }

    let oversized = repository
        .list_requests(AccessRequestQuery {
            status: None,
            limit: 1_000,
            offset: 0,
        })
        .await;
    assert!(matches!(oversized, Ok(values) if values.len() == 200));

    let empty_page = repository
        .list_requests(AccessRequestQuery {
            status: None,
            limit: 0,
            offset: 0,
        })
        .await;
    assert!(matches!(empty_page, Ok(values) if values.len() == 1));
}

#[tokio::test]
async fn listing_is_newest_first() {
    let repository = InMemoryAccessRequestRepository::new();
    let older = submitted(0);
    let newer = submitted(10);
    assert!(repository.insert_request(older.clone()).await.is_ok());
    assert!(repository.insert_request(newer.clone()).await.is_ok());

    let listed = repository
        .list_requests(AccessRequestQuery {
            status: Some(AccessRequestStatus::Pending),
            limit: 50,
            offset: 0,
        })
        .await;
    assert!(matches!(
        listed,
        Ok(values) if values.first().map(|value| value.request_id) == Some(newer.request_id)
    ));
}

#[tokio::test]
async fn release_restores_pending_only_before_actor_is_attached() {
    let repository = InMemoryAccessRequestRepository::new();
    let request = submitted(0);
    assert!(repository.insert_request(request.clone()).await.is_ok());

    assert!(matches!(
        repository.save_decision(&approved(&request)).await,
        Ok(true)
    ));
    assert!(matches!(
        repository.release_approval(&request).await,
        Ok(true)
    ));
    assert!(matches!(
        repository.find_request(request.request_id).await,
        Ok(Some(stored)) if stored == request
    ));

    let applicant = ActorId::new();
    assert!(matches!(
        repository.save_decision(&approved(&request)).await,
        Ok(true)
    ));
    assert!(
        repository
            .attach_actor(request.request_id, applicant)
            .await
            .is_ok()
    );
    assert!(matches!(
        repository.release_approval(&request).await,
        Ok(false)
    ));
    assert!(matches!(
        repository.find_request(request.request_id).await,
        Ok(Some(stored)) if stored.actor_id == Some(applicant)
            && stored.status == AccessRequestStatus::Approved
    ));
}

#[tokio::test]
async fn attaching_actor_to_pending_request_is_invalid() {
    let repository = InMemoryAccessRequestRepository::new();
    let request = submitted(0);
    assert!(repository.insert_request(request.clone()).await.is_ok());

    assert!(matches!(
        repository
            .attach_actor(request.request_id, ActorId::new())
            .await,
        Err(AppError::InvalidState(_))
    ));
}
