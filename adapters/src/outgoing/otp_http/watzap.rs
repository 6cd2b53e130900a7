use courier_application::{
    error::{AppError, AppResult},
    ports::outgoing::otp_sender::OtpSenderPort,
};
use domain::otp::{
    template::{OtpPlaceholders, fill_placeholders},
    vendor::VendorConfig,
};
use serde::Serialize;
use tracing::{error, info, instrument};

use super::read_body;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatzapRequest {
    pub api_key: String,
    pub number_key: String,
    pub phone_no: String,
    pub message: String,
}

/// Sends OTP codes as WhatsApp messages through Watzap's JSON API.
pub struct WatzapOtpSender {
    vendor: VendorConfig,
    client: reqwest::Client,
}

impl WatzapOtpSender {
    pub fn new(vendor: VendorConfig, client: reqwest::Client) -> Self {
        Self { vendor, client }
    }

    pub fn vendor(&self) -> &VendorConfig {
        &self.vendor
    }

    pub fn build_request(&self, phone: &str, otp_code: &str) -> WatzapRequest {
        WatzapRequest {
            api_key: self.vendor.api_key.clone(),
            number_key: self.vendor.number_key.clone(),
            phone_no: phone.to_string(),
            message: fill_placeholders(
                &self.vendor.default_message,
                &OtpPlaceholders::otp_code(otp_code),
            ),
        }
    }
}

#[async_trait::async_trait]
impl OtpSenderPort for WatzapOtpSender {
    #[instrument(skip(self, otp_code))]
    async fn send_otp(&self, phone: &str, otp_code: &str) -> AppResult<String> {
        let request = self.build_request(phone, otp_code);

        let response = self
            .client
            .post(&self.vendor.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.vendor.endpoint, "Watzap request failed");
                AppError::transport(e)
            })?;

        let body = read_body(&self.vendor.title, response).await?;
        info!(phone = phone, "OTP sent via Watzap");
        Ok(body)
    }
}
