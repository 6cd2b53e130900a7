use courier_application::{
    error::{AppError, AppResult},
    ports::outgoing::otp_sender::OtpSenderPort,
};
use domain::otp::{
    template::{OtpPlaceholders, fill_placeholders},
    vendor::{COUNTRY_CODE_INDONESIA, VendorConfig},
};
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use tracing::{error, info, instrument};

use super::read_body;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FonnteRequest {
    pub target: String,
    pub message: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
}

/// Sends OTP codes through Fonnte. The API key travels in the `Authorization` header and the
/// country code is always Indonesia's.
pub struct FonnteOtpSender {
    vendor: VendorConfig,
    client: reqwest::Client,
}

impl FonnteOtpSender {
    pub fn new(vendor: VendorConfig, client: reqwest::Client) -> Self {
        Self { vendor, client }
    }

    pub fn vendor(&self) -> &VendorConfig {
        &self.vendor
    }

    pub fn build_request(&self, phone: &str, otp_code: &str) -> FonnteRequest {
        FonnteRequest {
            target: phone.to_string(),
            message: fill_placeholders(
                &self.vendor.default_message,
                &OtpPlaceholders::otp_code(otp_code),
            ),
            country_code: COUNTRY_CODE_INDONESIA.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl OtpSenderPort for FonnteOtpSender {
    #[instrument(skip(self, otp_code))]
    async fn send_otp(&self, phone: &str, otp_code: &str) -> AppResult<String> {
        let request = self.build_request(phone, otp_code);

        let response = self
            .client
            .post(&self.vendor.endpoint)
            .header(AUTHORIZATION, &self.vendor.api_key)
            .form(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.vendor.endpoint, "Fonnte request failed");
                AppError::transport(e)
            })?;

        let body = read_body(&self.vendor.title, response).await?;
        info!(phone = phone, "OTP sent via Fonnte");
        Ok(body)
    }
}
