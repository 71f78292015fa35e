use std::sync::Arc;

use assetdesk_application::AccessDecisionNotifier;
use assetdesk_core::AppError;
use assetdesk_infrastructure::{
    ConsoleAccessDecisionNotifier, EmailAccessDecisionNotifier, SmtpEmailConfig, SmtpEmailService,
};

use crate::api_config::{ApiConfig, EmailProviderConfig};

pub(super) fn build_decision_notifier(
    config: &ApiConfig,
) -> Result<Arc<dyn AccessDecisionNotifier>, AppError> {
    let notifier: Arc<dyn AccessDecisionNotifier> = match &config.email_provider {
        EmailProviderConfig::Console => Arc::new(ConsoleAccessDecisionNotifier::new()),
        EmailProviderConfig::Smtp(smtp) => {
            let email_service = SmtpEmailService::new(SmtpEmailConfig {
                host: smtp.host.clone(),
                port: smtp.port,
                username: smtp.username.clone(),
                password: smtp.password.clone(),
                from_address: smtp.from_address.clone(),
            })?;
            Arc::new(EmailAccessDecisionNotifier::new(
                Arc::new(email_service),
                config.frontend_url.as_str(),
            ))
        }
    };

    Ok(notifier)
}
