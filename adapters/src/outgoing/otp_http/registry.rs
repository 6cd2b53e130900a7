use std::sync::Arc;

use courier_application::{error::AppResult, ports::outgoing::otp_sender::DynOtpSenderPort};
use domain::otp::vendor::{VendorConfig, VendorKind};
use tracing::debug;

use super::{fonnte::FonnteOtpSender, watzap::WatzapOtpSender};

/// What a caller hands the registry besides the vendor name.
#[derive(Debug, Clone, Copy, Default)]
pub struct VendorCredentials<'a> {
    pub api_key: &'a str,
    pub number_key: &'a str,
    /// Replaces the built-in template when present and non-empty.
    pub default_message: Option<&'a str>,
    /// Replaces the vendor's public endpoint when present and non-empty.
    pub endpoint: Option<&'a str>,
}

impl<'a> VendorCredentials<'a> {
    #[must_use]
    pub fn new(api_key: &'a str, number_key: &'a str) -> Self {
        Self {
            api_key,
            number_key,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default_message(mut self, message: &'a str) -> Self {
        self.default_message = Some(message);
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = Some(endpoint);
        self
    }
}

/// Looks the vendor up by name. Unknown names yield `VendorNotFound` and no sender.
pub fn init_vendor(name: &str, credentials: &VendorCredentials<'_>) -> AppResult<DynOtpSenderPort> {
    let kind: VendorKind = name.parse()?;
    Ok(init_vendor_kind(kind, credentials))
}

pub fn init_vendor_kind(kind: VendorKind, credentials: &VendorCredentials<'_>) -> DynOtpSenderPort {
    let vendor = VendorConfig::new(
        kind,
        credentials.api_key,
        credentials.number_key,
        credentials.default_message,
        credentials.endpoint,
    );

    debug!(vendor = %kind, endpoint = %vendor.endpoint, "OTP vendor initialized");

    let client = reqwest::Client::new();
    match kind {
        VendorKind::Watzap => Arc::new(WatzapOtpSender::new(vendor, client)),
        VendorKind::Fonnte => Arc::new(FonnteOtpSender::new(vendor, client)),
    }
}
