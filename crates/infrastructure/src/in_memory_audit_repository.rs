use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use assetdesk_application::{
    AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository,
};
use assetdesk_core::AppResult;

/// In-memory audit trail serving both the append and the read port.
#[derive(Debug, Default)]
pub struct InMemoryAuditRepository {
    entries: RwLock<Vec<(Uuid, DateTime<Utc>, AuditEvent)>>,
}

impl InMemoryAuditRepository {
    /// Creates an empty audit trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.entries
            .write()
            .await
            .push((Uuid::new_v4(), Utc::now(), event));
        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditRepository {
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let entries = self.entries.read().await;

        Ok(entries
            .iter()
            .rev()
            .filter(|(_, _, event)| {
                query
                    .action
                    .as_deref()
                    .is_none_or(|action| event.action.as_str() == action)
                    && query
                        .subject
                        .as_deref()
                        .is_none_or(|subject| event.subject == subject)
            })
            .skip(query.offset)
            .take(query.limit.max(1))
            .map(|(event_id, created_at, event)| AuditLogEntry {
                event_id: event_id.to_string(),
                subject: event.subject.clone(),
                action: event.action.as_str().to_owned(),
                resource_type: event.resource_type.clone(),
                resource_id: event.resource_id.clone(),
                detail: event.detail.clone(),
                created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            })
            .collect())
    }
}
