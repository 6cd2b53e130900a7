use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AppError, AppResult};
use domain::email::provider::ProviderKind;
use domain::otp::vendor::VendorKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub otp: Option<OtpConfig>,
    pub email: Option<EmailConfig>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    pub vendor: String,
    #[serde(serialize_with = "serialize_secret", deserialize_with = "deserialize_secret")]
    pub api_key: SecretString,
    pub number_key: String,
    pub default_message: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub provider: String,
    pub smtp: SmtpSettings,
}

/// Host and port are ignored by the specialized providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    pub port: String,
    pub username: String,
    #[serde(serialize_with = "serialize_secret", deserialize_with = "deserialize_secret")]
    pub password: SecretString,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

// Empty secrets stay empty so layered defaults never turn into a placeholder value.
fn serialize_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if secret.expose_secret().is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str("[REDACTED]")
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: "587".to_string(),
            username: String::new(),
            password: SecretString::from(""),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl OtpConfig {
    pub fn vendor_kind(&self) -> AppResult<VendorKind> {
        Ok(self.vendor.parse()?)
    }
}

impl EmailConfig {
    pub fn provider_kind(&self) -> AppResult<ProviderKind> {
        Ok(self.provider.parse()?)
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        if let Some(otp) = &self.otp {
            otp.vendor_kind()?;

            if otp.api_key.expose_secret().is_empty() {
                return Err(AppError::ConfigError {
                    message: "otp api_key cannot be empty".to_string(),
                });
            }

            if let Some(endpoint) = otp.endpoint.as_deref().filter(|e| !e.is_empty()) {
                url::Url::parse(endpoint).map_err(|e| AppError::ConfigError {
                    message: format!("otp endpoint '{endpoint}' is not a valid URL: {e}"),
                })?;
            }
        }

        if let Some(email) = &self.email {
            email.provider_kind()?;
        }

        Ok(())
    }
}
