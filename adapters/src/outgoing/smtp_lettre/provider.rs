use std::sync::Arc;

use courier_application::{
    error::AppResult,
    ports::outgoing::email_provider::{DynEmailProviderPort, EmailProviderPort, SmtpAuth},
};
use domain::email::{provider::ProviderKind, smtp_config::SmtpConfig};
use secrecy::SecretString;
use tracing::info;

/// SMTP provider built from an explicit config. Gmail, Zoho and Outlook are the same provider
/// with a fixed host and port.
#[derive(Debug, Clone)]
pub struct GenericSmtpProvider {
    config: SmtpConfig,
}

impl GenericSmtpProvider {
    pub fn new(config: SmtpConfig) -> AppResult<Self> {
        config.validate()?;

        info!(
            smtp_host = %config.host,
            smtp_port = %config.port,
            username = %config.username,
            "SMTP email provider initialized"
        );

        Ok(Self { config })
    }

    pub fn gmail(username: &str, password: &str) -> AppResult<Self> {
        Self::preconfigured(ProviderKind::Gmail, username, password)
    }

    pub fn zoho(username: &str, password: &str) -> AppResult<Self> {
        Self::preconfigured(ProviderKind::Zoho, username, password)
    }

    pub fn outlook(username: &str, password: &str) -> AppResult<Self> {
        Self::preconfigured(ProviderKind::Outlook, username, password)
    }

    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }

    fn preconfigured(kind: ProviderKind, username: &str, password: &str) -> AppResult<Self> {
        let (host, port) = kind.fixed_endpoint().unwrap_or_default();
        Self::new(SmtpConfig::new(host, port, username, password))
    }
}

impl EmailProviderPort for GenericSmtpProvider {
    fn auth(&self) -> SmtpAuth {
        SmtpAuth {
            username: self.config.username.clone(),
            password: SecretString::from(self.config.password.clone()),
            host: self.config.host.clone(),
        }
    }

    fn address(&self) -> String {
        self.config.address()
    }

    fn from(&self) -> String {
        self.config.username.clone()
    }
}

/// Specialized kinds keep their fixed host and port whatever `config` says.
pub fn build_provider(kind: ProviderKind, config: SmtpConfig) -> AppResult<DynEmailProviderPort> {
    let provider = match kind {
        ProviderKind::Smtp => GenericSmtpProvider::new(config)?,
        ProviderKind::Gmail => GenericSmtpProvider::gmail(&config.username, &config.password)?,
        ProviderKind::Zoho => GenericSmtpProvider::zoho(&config.username, &config.password)?,
        ProviderKind::Outlook => GenericSmtpProvider::outlook(&config.username, &config.password)?,
    };
    Ok(Arc::new(provider))
}

pub fn build_provider_by_name(name: &str, config: SmtpConfig) -> AppResult<DynEmailProviderPort> {
    build_provider(name.parse()?, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_application::error::AppError;
    use domain::error::DomainError;
    use secrecy::ExposeSecret;

    fn config() -> SmtpConfig {
        SmtpConfig::new("mail.internal", "2525", "noreply@example.com", "s3cret")
    }

    #[test]
    fn generic_provider_exposes_auth_address_and_sender() {
        let provider = GenericSmtpProvider::new(config()).unwrap();

        let auth = provider.auth();
        assert_eq!(auth.username, "noreply@example.com");
        assert_eq!(auth.password.expose_secret(), "s3cret");
        assert_eq!(auth.host, "mail.internal");
        assert_eq!(provider.address(), "mail.internal:2525");
        assert_eq!(provider.from(), "noreply@example.com");
    }

    #[test]
    fn empty_fields_are_rejected_at_construction() {
        let mut missing_password = config();
        missing_password.password.clear();

        let err = GenericSmtpProvider::new(missing_password).unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::ConfigError { .. })));
        assert_eq!(err.to_string(), "invalid config: password is required");
    }

    #[test]
    fn specialized_constructors_require_credentials() {
        assert!(GenericSmtpProvider::gmail("", "pw").is_err());
        assert!(GenericSmtpProvider::zoho("user@zoho.com", "").is_err());
    }

    #[test]
    fn specialized_providers_ignore_caller_host_and_port() {
        let cases = [
            (ProviderKind::Gmail, "smtp.gmail.com:587"),
            (ProviderKind::Zoho, "smtp.zoho.com:587"),
            (ProviderKind::Outlook, "smtp.office365.com:587"),
        ];

        for (kind, expected) in cases {
            let provider = build_provider(kind, config()).unwrap();

            assert_eq!(provider.address(), expected);
            assert_eq!(provider.from(), "noreply@example.com");
        }
    }

    #[test]
    fn specialized_auth_is_bound_to_the_fixed_host() {
        let provider = GenericSmtpProvider::outlook("me@contoso.com", "pw").unwrap();

        assert_eq!(provider.auth().host, "smtp.office365.com");
        assert_eq!(provider.config().port, "587");
    }

    #[test]
    fn generic_kind_uses_the_caller_config() {
        let provider = build_provider(ProviderKind::Smtp, config()).unwrap();

        assert_eq!(provider.address(), "mail.internal:2525");
    }

    #[test]
    fn unknown_provider_name_is_a_lookup_error() {
        let result = build_provider_by_name("sendgrid", config());

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::ProviderNotFound(_)))
        ));
    }
}
