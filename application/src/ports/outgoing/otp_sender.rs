use std::sync::Arc;

use crate::error::AppResult;

/// Capability shared by every OTP vendor adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait OtpSenderPort: Send + Sync {
    /// Sends `otp_code` to `phone` and returns the vendor's response body unmodified.
    async fn send_otp(&self, phone: &str, otp_code: &str) -> AppResult<String>;
}

pub type DynOtpSenderPort = Arc<dyn OtpSenderPort>;
