use async_trait::async_trait;

use assetdesk_core::AppResult;
use assetdesk_domain::{AccessRequestId, AccessRequestStatus, EmailAddress, Role};

/// Outbound email port.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Sends a plain-text or HTML email.
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: Option<&str>,
    ) -> AppResult<()>;
}

/// Decision event delivered to an access request applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecisionNotice {
    /// Decided request.
    pub request_id: AccessRequestId,
    /// Applicant name as submitted.
    pub applicant_name: String,
    /// Applicant email.
    pub email: EmailAddress,
    /// Terminal status reached.
    pub decision: AccessRequestStatus,
    /// Role granted on approval.
    pub assigned_role: Option<Role>,
    /// Reason given on rejection.
    pub reason: Option<String>,
}

/// Port notifying applicants of access request decisions.
#[async_trait]
pub trait AccessDecisionNotifier: Send + Sync {
    /// Delivers one decision notice.
    async fn notify(&self, notice: AccessDecisionNotice) -> AppResult<()>;
}
