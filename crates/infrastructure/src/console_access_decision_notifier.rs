use async_trait::async_trait;
use tracing::info;

use assetdesk_application::{AccessDecisionNotice, AccessDecisionNotifier};
use assetdesk_core::AppResult;

/// Development notifier that logs each decision instead of mailing it.
#[derive(Clone, Debug, Default)]
pub struct ConsoleAccessDecisionNotifier;

impl ConsoleAccessDecisionNotifier {
    /// Creates a console notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccessDecisionNotifier for ConsoleAccessDecisionNotifier {
    async fn notify(&self, notice: AccessDecisionNotice) -> AppResult<()> {
        info!(
            request_id = %notice.request_id,
            to = notice.email.as_str(),
            applicant = notice.applicant_name.as_str(),
            decision = notice.decision.as_str(),
            role = notice.assigned_role.map(|role| role.as_str()),
            reason = notice.reason.as_deref(),
            "access decision notice (console)"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assetdesk_application::{AccessDecisionNotice, AccessDecisionNotifier};
    use assetdesk_domain::{AccessRequestId, AccessRequestStatus, EmailAddress, Role};

    use super::ConsoleAccessDecisionNotifier;

    fn notice(decision: AccessRequestStatus) -> AccessDecisionNotice {
        let email = match EmailAddress::new("dana@example.com") {
            Ok(email) => email,
            Err(error) => panic!("invalid test email: {error}"),
        };
        AccessDecisionNotice {
            request_id: AccessRequestId::new(),
            applicant_name: "Dana".to_owned(),
            email,
            decision,
            assigned_role: (decision == AccessRequestStatus::Approved).then_some(Role::Manager),
            reason: (decision == AccessRequestStatus::Rejected).then(|| "unverified".to_owned()),
        }
    }

    #[tokio::test]
    async fn every_decision_is_delivered() {
        let notifier = ConsoleAccessDecisionNotifier::new();

        for decision in [AccessRequestStatus::Approved, AccessRequestStatus::Rejected] {
            assert!(notifier.notify(notice(decision)).await.is_ok());
        }
    }
}
