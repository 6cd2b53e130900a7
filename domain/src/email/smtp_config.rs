use std::fmt;

use crate::error::{DomainError, DomainResult};

#[derive(Clone, PartialEq, Eq, Default)]
pub struct SmtpConfig {
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
}

impl SmtpConfig {
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        port: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reports the first missing field in host, port, username, password order.
    pub fn validate(&self) -> DomainResult<()> {
        if self.host.is_empty() {
            return Err(DomainError::config("host is required"));
        }
        if self.port.is_empty() {
            return Err(DomainError::config("port is required"));
        }
        if self.username.is_empty() {
            return Err(DomainError::config("username is required"));
        }
        if self.password.is_empty() {
            return Err(DomainError::config("password is required"));
        }

        self.port_number()?;
        Ok(())
    }

    pub fn port_number(&self) -> DomainResult<u16> {
        self.port
            .parse::<u16>()
            .map_err(|e| DomainError::config(format!("port '{}' is not valid: {e}", self.port)))
    }

    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
