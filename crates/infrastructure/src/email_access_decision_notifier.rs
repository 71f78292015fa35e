use std::sync::Arc;

use async_trait::async_trait;

use assetdesk_application::{AccessDecisionNotice, AccessDecisionNotifier, EmailService};
use assetdesk_core::AppResult;
use assetdesk_domain::AccessRequestStatus;


/// Notifies applicants of access request decisions by email.
#[derive(Clone)]
pub struct EmailAccessDecisionNotifier {
    email_service: Arc<dyn EmailService>,
    frontend_url: String,
}

impl EmailAccessDecisionNotifier {
    /// Creates a notifier linking applicants back to `frontend_url`.
    #[must_use]
    pub fn new(email_service: Arc<dyn EmailService>, frontend_url: impl Into<String>) -> Self {
        Self {
            email_service,
            frontend_url: frontend_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn compose(&self, notice: &AccessDecisionNotice) -> (String, String) {
        match notice.decision {
            AccessRequestStatus::Approved => {
                let role = notice
                    .assigned_role
                    .map(|role| role.as_str())
                    .unwrap_or("USER");
                (
                    "Your AssetDesk access request was approved".to_owned(),
                    format!(
                        "Hello {},\n\nyour access request has been approved with the role {role}.\n\
                         Sign in at {}/login with {}.\n",
                        notice.applicant_name,
                        self.frontend_url,
                        notice.email.as_str()
                    ),
                )
            }
            AccessRequestStatus::Rejected => {
                let reason = notice
                    .reason
                    .as_deref()
                    .map(|reason| format!("\nReason: {reason}\n"))
                    .unwrap_or_default();
                (
                    "Your AssetDesk access request was declined".to_owned(),
                    format!(
                        "Hello {},\n\nyour access request has been declined.\n{reason}",
                        notice.applicant_name
                    ),
                )
            }
            AccessRequestStatus::Pending => (
                "Your AssetDesk access request was received".to_owned(),
                format!(
                    "Hello {},\n\nyour access request is awaiting review.\n",
                    notice.applicant_name
                ),
            ),
        }
    }
}

#[async_trait]
impl AccessDecisionNotifier for EmailAccessDecisionNotifier {
    async fn notify(&self, notice: AccessDecisionNotice) -> AppResult<()> {
        let (subject, text_body) = self.compose(&notice);

        self.email_service
            .send_email(notice.email.as_str(), subject.as_str(), text_body.as_str(), None)
            .await
    }
}
