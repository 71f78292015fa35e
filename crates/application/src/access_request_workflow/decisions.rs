use super::*;

impl AccessRequestWorkflow {
    /// Approves a pending request and grants `role` to the applicant.
    ///
    /// The approval is claimed first, so only the winner of concurrent
    /// decisions resolves the applicant actor and grants the role. When
    /// provisioning fails the claim is released and the request is pending
    /// again. Fails with [`AppError::InvalidState`] when the request was
    /// already decided, including by a concurrent call.
    pub async fn approve(
        &self,
        actor_id: ActorId,
        request_id: AccessRequestId,
        role: Role,
    ) -> AppResult<AccessRequest> {
        self.guard
            .require(actor_id, Operation::ApproveAccessRequest)
            .await?;

        let request = self.load_pending(request_id).await?;
        let mut decided = request.decide(
            AccessDecision::Approve {
                decided_by: actor_id,
                role,
            },
            Utc::now(),
        )?;
        self.store_decision(&decided).await?;

        let applicant = match self.provision_applicant(&decided, role).await {
            Ok(applicant) => applicant,
            Err(error) => {
                self.release_claim(&request).await;
                return Err(error);
            }
        };
        decided.actor_id = Some(applicant);

        self.record_decision(AuditEvent {
            subject: actor_id.to_string(),
            action: AuditAction::AccessRequestApproved,
            resource_type: AUDIT_RESOURCE_TYPE.to_owned(),
            resource_id: request_id.to_string(),
            detail: Some(format!(
                "approved '{}' as '{}' for actor '{}'",
                decided.email.as_str(),
                role.as_str(),
                applicant
            )),
        })
        .await;

        info!(%request_id, decided_by = %actor_id, role = role.as_str(), "access request approved");
        self.send_notice(&decided).await;

        Ok(decided)
    }

    /// Rejects a pending request with an optional reason.
    ///
    /// Fails with [`AppError::InvalidState`] when the request was already decided.
    pub async fn reject(
        &self,
        actor_id: ActorId,
        request_id: AccessRequestId,
        reason: Option<String>,
    ) -> AppResult<AccessRequest> {
        self.guard
            .require(actor_id, Operation::RejectAccessRequest)
            .await?;

        let request = self.load_pending(request_id).await?;
        let decided = request.decide(
            AccessDecision::Reject {
                decided_by: actor_id,
                reason,
            },
            Utc::now(),
        )?;
        self.store_decision(&decided).await?;

        self.record_decision(AuditEvent {
            subject: actor_id.to_string(),
            action: AuditAction::AccessRequestRejected,
            resource_type: AUDIT_RESOURCE_TYPE.to_owned(),
            resource_id: request_id.to_string(),
            detail: decided.decision_note.clone(),
        })
        .await;

        info!(%request_id, decided_by = %actor_id, "access request rejected");
        self.send_notice(&decided).await;

        Ok(decided)
    }

    async fn load_pending(&self, request_id: AccessRequestId) -> AppResult<AccessRequest> {
        let request = self.load(request_id).await?;
        if request.status.is_terminal() {
            return Err(already_decided(&request));
        }

        Ok(request)
    }

    async fn store_decision(&self, decided: &AccessRequest) -> AppResult<()> {
        if self.repository.save_decision(decided).await? {
            return Ok(());
        }

        match self.repository.find_request(decided.request_id).await? {
            Some(current) => Err(already_decided(&current)),
            None => Err(AppError::NotFound(format!(
                "access request '{}' not found",
                decided.request_id
            ))),
        }
    }

    async fn provision_applicant(&self, decided: &AccessRequest, role: Role) -> AppResult<ActorId> {
        let applicant = self
            .actor_directory
            .resolve_or_create_by_email(&decided.email, decided.name.as_str())
            .await?;

        match self.registry.grant(applicant.actor_id, role).await {
            Ok(_) => {}
            Err(AppError::Conflict(_)) => {
                info!(
                    request_id = %decided.request_id,
                    applicant = %applicant.actor_id,
                    role = role.as_str(),
                    "applicant already held the approved role"
                );
            }
            Err(error) => return Err(error),
        }

        self.repository
            .attach_actor(decided.request_id, applicant.actor_id)
            .await?;

        Ok(applicant.actor_id)
    }

    async fn release_claim(&self, pending: &AccessRequest) {
        match self.repository.release_approval(pending).await {
            Ok(true) => {
                warn!(request_id = %pending.request_id, "approval released after provisioning failure");
            }
            Ok(false) => {
                warn!(request_id = %pending.request_id, "approval claim was no longer held");
            }
            Err(error) => {
                error!(
                    request_id = %pending.request_id,
                    %error,
                    "failed to release approval claim"
                );
            }
        }
    }

    async fn record_decision(&self, event: AuditEvent) {
        let resource_id = event.resource_id.clone();
        if let Err(error) = self.audit_repository.append_event(event).await {
            error!(request_id = %resource_id, %error, "failed to audit access decision");
        }
    }

    async fn send_notice(&self, decided: &AccessRequest) {
        let notice = AccessDecisionNotice {
            request_id: decided.request_id,
            applicant_name: decided.name.clone(),
            email: decided.email.clone(),
            decision: decided.status,
            assigned_role: decided.assigned_role,
            reason: decided.decision_note.clone(),
        };

        if let Err(error) = self.notifier.notify(notice).await {
            warn!(
                request_id = %decided.request_id,
                %error,
                "access decision notification failed"
            );
        }
    }
}

fn already_decided(request: &AccessRequest) -> AppError {
    AppError::InvalidState(format!(
        "access request '{}' is already {}",
        request.request_id, request.status
    ))
}
