use std::sync::Arc;

use courier_application::{
    email::client::EmailClient,
    error::AppResult,
    infrastructure_config::{EmailConfig, OtpConfig},
    otp::service::OtpService,
    ports::outgoing::otp_sender::DynOtpSenderPort,
};
use domain::email::smtp_config::SmtpConfig;
use secrecy::ExposeSecret;

use crate::outgoing::{
    otp_http::registry::{VendorCredentials, init_vendor},
    smtp_lettre::{provider::build_provider, transport::LettreMailTransport},
};

pub fn build_otp_sender(config: &OtpConfig) -> AppResult<DynOtpSenderPort> {
    let credentials = VendorCredentials {
        api_key: config.api_key.expose_secret(),
        number_key: &config.number_key,
        default_message: config.default_message.as_deref(),
        endpoint: config.endpoint.as_deref(),
    };
    init_vendor(&config.vendor, &credentials)
}

pub fn build_otp_service(config: &OtpConfig) -> AppResult<OtpService> {
    Ok(OtpService::new(build_otp_sender(config)?))
}

pub fn build_email_client(config: &EmailConfig) -> AppResult<EmailClient> {
    let smtp = SmtpConfig::new(
        config.smtp.host.clone(),
        config.smtp.port.clone(),
        config.smtp.username.clone(),
        config.smtp.password.expose_secret(),
    );
    let provider = build_provider(config.provider_kind()?, smtp)?;

    Ok(EmailClient::new(provider, Arc::new(LettreMailTransport::new())))
}
