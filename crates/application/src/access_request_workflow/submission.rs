use super::*;

impl AccessRequestWorkflow {
    /// Records a new pending request. Open to unauthenticated applicants.
    ///
    /// Several pending requests from one email are accepted.
    pub async fn submit(&self, input: SubmitAccessRequestInput) -> AppResult<AccessRequest> {
        let request = AccessRequest::submit(
            input.name.as_str(),
            input.email.as_str(),
            input.description.as_deref(),
            Utc::now(),
        )?;

        self.repository.insert_request(request.clone()).await?;

        self.audit_repository
            .append_event(AuditEvent {
                subject: request.email.as_str().to_owned(),
                action: AuditAction::AccessRequestSubmitted,
                resource_type: AUDIT_RESOURCE_TYPE.to_owned(),
                resource_id: request.request_id.to_string(),
                detail: Some(format!("access request submitted by '{}'", request.name)),
            })
            .await?;

        info!(request_id = %request.request_id, "access request submitted");

        Ok(request)
    }
}
