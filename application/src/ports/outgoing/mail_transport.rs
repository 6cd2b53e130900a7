use std::sync::Arc;

use crate::error::AppResult;
use crate::ports::outgoing::email_provider::SmtpAuth;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MailTransportPort: Send + Sync {
    /// Submits an already composed message. One connection per call.
    async fn send_raw(
        &self,
        address: &str,
        auth: &SmtpAuth,
        from: &str,
        to: &[String],
        message: &[u8],
    ) -> AppResult<()>;
}

pub type DynMailTransportPort = Arc<dyn MailTransportPort>;
