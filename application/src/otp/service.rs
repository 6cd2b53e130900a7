use tracing::{error, instrument};

use crate::error::AppResult;
use crate::ports::outgoing::otp_sender::DynOtpSenderPort;

/// Thin entry point over whichever vendor adapter the registry produced.
pub struct OtpService {
    sender: DynOtpSenderPort,
}

impl OtpService {
    pub fn new(sender: DynOtpSenderPort) -> Self {
        Self { sender }
    }

    #[instrument(skip(self, otp_code))]
    pub async fn send_otp(&self, phone: &str, otp_code: &str) -> AppResult<String> {
        self.sender.send_otp(phone, otp_code).await.map_err(|e| {
            error!(error = %e, phone = phone, "Failed to send OTP");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::ports::outgoing::otp_sender::MockOtpSenderPort;
    use mockall::predicate::*;
    use std::io;
    use std::sync::Arc;

    #[tokio::test]
    async fn returns_the_vendor_response_unchanged() {
        let mut sender = MockOtpSenderPort::new();
        sender
            .expect_send_otp()
            .with(eq("+628123"), eq("123456"))
            .times(1)
            .returning(|_, _| Ok(r#"{"status":"200"}"#.to_string()));

        let service = OtpService::new(Arc::new(sender));

        let body = service.send_otp("+628123", "123456").await.unwrap();
        assert_eq!(body, r#"{"status":"200"}"#);
    }

    #[tokio::test]
    async fn propagates_transport_errors_verbatim() {
        let mut sender = MockOtpSenderPort::new();
        sender.expect_send_otp().times(1).returning(|_, _| {
            Err(AppError::transport(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        });

        let service = OtpService::new(Arc::new(sender));

        let err = service.send_otp("+628123", "123456").await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(err.to_string(), "connection refused");
    }
}
