use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::template::DEFAULT_MESSAGE_TEMPLATE;
use crate::error::DomainError;

pub const WATZAP_DEFAULT_ENDPOINT: &str = "https://api.watzap.id/v1/send_message";
pub const FONNTE_DEFAULT_ENDPOINT: &str = "https://api.fonnte.com/send";

/// Country code Fonnte prepends to local numbers. Watzap has no equivalent field.
pub const COUNTRY_CODE_INDONESIA: &str = "62";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorKind {
    Watzap,
    Fonnte,
}

impl VendorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Watzap => "watzap",
            Self::Fonnte => "fonnte",
        }
    }

    #[must_use]
    pub fn default_endpoint(self) -> &'static str {
        match self {
            Self::Watzap => WATZAP_DEFAULT_ENDPOINT,
            Self::Fonnte => FONNTE_DEFAULT_ENDPOINT,
        }
    }
}

impl fmt::Display for VendorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "watzap" => Ok(Self::Watzap),
            "fonnte" => Ok(Self::Fonnte),
            other => Err(DomainError::VendorNotFound(other.to_string())),
        }
    }
}

/// Settings an OTP adapter is built with. Never mutated after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct VendorConfig {
    pub title: String,
    pub api_key: String,
    pub endpoint: String,
    pub number_key: String,
    /// May contain `[OTP_CODE]`, `[ACTION_NAME]` and `[CLIENT_NAME]`.
    pub default_message: String,
}

impl VendorConfig {
    /// Falls back to the vendor's public endpoint and to [`DEFAULT_MESSAGE_TEMPLATE`] when the
    /// overrides are missing or empty.
    #[must_use]
    pub fn new(
        kind: VendorKind,
        api_key: &str,
        number_key: &str,
        default_message: Option<&str>,
        endpoint: Option<&str>,
    ) -> Self {
        let default_message = default_message
            .filter(|message| !message.is_empty())
            .unwrap_or(DEFAULT_MESSAGE_TEMPLATE);
        let endpoint = endpoint
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or(kind.default_endpoint());

        Self {
            title: kind.as_str().to_string(),
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            number_key: number_key.to_string(),
            default_message: default_message.to_string(),
        }
    }
}

impl fmt::Debug for VendorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendorConfig")
            .field("title", &self.title)
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("number_key", &self.number_key)
            .field("default_message", &self.default_message)
            .finish()
    }
}
