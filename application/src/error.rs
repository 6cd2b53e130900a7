use std::error::Error as StdError;
use thiserror::Error;

use domain::error::DomainError;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid address: {message}")]
    InvalidAddress { message: String },

    /// Network, TLS or authentication failure reported by the HTTP/SMTP client, untouched.
    #[error(transparent)]
    Transport(BoxError),

    #[error("template execution failed: {source}")]
    TemplateRender {
        #[source]
        source: BoxError,
    },
}

impl AppError {
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport(source.into())
    }

    pub fn template(source: impl Into<BoxError>) -> Self {
        Self::TemplateRender {
            source: source.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
