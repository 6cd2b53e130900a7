use serde::Serialize;
use tracing::{error, info, instrument};

use crate::error::{AppError, AppResult};
use crate::ports::outgoing::email_provider::DynEmailProviderPort;
use crate::ports::outgoing::email_template::EmailTemplatePort;
use crate::ports::outgoing::mail_transport::DynMailTransportPort;
use domain::email::message::EmailMessage;

/// Sends HTML email through any [`EmailProviderPort`](crate::ports::outgoing::email_provider::EmailProviderPort).
pub struct EmailClient {
    provider: DynEmailProviderPort,
    transport: DynMailTransportPort,
}

impl EmailClient {
    pub fn new(provider: DynEmailProviderPort, transport: DynMailTransportPort) -> Self {
        Self {
            provider,
            transport,
        }
    }

    #[instrument(skip_all, fields(recipients = message.to.len()))]
    pub async fn send_email(&self, message: &EmailMessage) -> AppResult<()> {
        let auth = self.provider.auth();
        let address = self.provider.address();
        let from = self.provider.from();

        let raw = message.to_mime_bytes();

        self.transport
            .send_raw(&address, &auth, &from, &message.to, &raw)
            .await
            .map_err(|e| {
                error!(error = %e, address = %address, "Failed to send email");
                e
            })?;

        info!(address = %address, from = %from, "Email sent");
        Ok(())
    }

    /// Renders `template` with `data` and sends the result. Nothing is sent if rendering fails.
    pub async fn send_template_email<T>(
        &self,
        to: &[String],
        subject: &str,
        template: &dyn EmailTemplatePort,
        data: &T,
    ) -> AppResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let data = serde_json::to_value(data).map_err(AppError::template)?;
        let body = template.render(&data).map_err(AppError::template)?;

        let message = EmailMessage::new(to.to_vec(), subject, body);
        self.send_email(&message).await
    }

    pub async fn send_single_email<T>(
        &self,
        to: &str,
        subject: &str,
        template: &dyn EmailTemplatePort,
        data: &T,
    ) -> AppResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.send_template_email(&[to.to_string()], subject, template, data)
            .await
    }
}
