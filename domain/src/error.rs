use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid config: {message}")]
    ConfigError { message: String },

    #[error("not found vendor: {0}")]
    VendorNotFound(String),

    #[error("not found email provider: {0}")]
    ProviderNotFound(String),
}

impl DomainError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
