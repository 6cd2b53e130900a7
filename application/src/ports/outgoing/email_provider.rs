use secrecy::SecretString;
use std::sync::Arc;

/// PLAIN SMTP credentials. `host` is the server the credentials are bound to.
#[derive(Debug, Clone)]
pub struct SmtpAuth {
    pub username: String,
    pub password: SecretString,
    pub host: String,
}

/// The three facts the email client needs from a provider to submit a message.
#[cfg_attr(test, mockall::automock)]
pub trait EmailProviderPort: Send + Sync {
    fn auth(&self) -> SmtpAuth;

    /// `host:port`
    fn address(&self) -> String;

    fn from(&self) -> String;
}

pub type DynEmailProviderPort = Arc<dyn EmailProviderPort>;
