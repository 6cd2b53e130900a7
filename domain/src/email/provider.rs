use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::DomainError;

pub const GMAIL_SMTP_HOST: &str = "smtp.gmail.com";
pub const ZOHO_SMTP_HOST: &str = "smtp.zoho.com";
pub const OUTLOOK_SMTP_HOST: &str = "smtp.office365.com";
pub const SUBMISSION_PORT: &str = "587";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Smtp,
    Gmail,
    Zoho,
    Outlook,
}

impl ProviderKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smtp => "smtp",
            Self::Gmail => "gmail",
            Self::Zoho => "zoho",
            Self::Outlook => "outlook",
        }
    }

    /// Host and port baked into a specialized provider. `None` for generic SMTP.
    #[must_use]
    pub fn fixed_endpoint(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Smtp => None,
            Self::Gmail => Some((GMAIL_SMTP_HOST, SUBMISSION_PORT)),
            Self::Zoho => Some((ZOHO_SMTP_HOST, SUBMISSION_PORT)),
            Self::Outlook => Some((OUTLOOK_SMTP_HOST, SUBMISSION_PORT)),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smtp" => Ok(Self::Smtp),
            "gmail" => Ok(Self::Gmail),
            "zoho" => Ok(Self::Zoho),
            "outlook" => Ok(Self::Outlook),
            other => Err(DomainError::ProviderNotFound(other.to_string())),
        }
    }
}
