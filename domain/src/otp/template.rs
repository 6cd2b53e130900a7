//! Placeholder tokens recognized in OTP message templates.
//!
//! Templates are stored verbatim in [`VendorConfig`](super::vendor::VendorConfig); tokens are
//! only substituted when a message is about to leave the process.

pub const OTP_CODE_PLACEHOLDER: &str = "[OTP_CODE]";
pub const ACTION_NAME_PLACEHOLDER: &str = "[ACTION_NAME]";
pub const CLIENT_NAME_PLACEHOLDER: &str = "[CLIENT_NAME]";

pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Welcome to TEST. Your request [ACTION_NAME] requires OTP.  Here is your OTP CODE: [OTP_CODE]";

/// Values for the recognized placeholders. A `None` leaves its token untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpPlaceholders<'a> {
    pub otp_code: Option<&'a str>,
    pub action_name: Option<&'a str>,
    pub client_name: Option<&'a str>,
}

impl<'a> OtpPlaceholders<'a> {
    #[must_use]
    pub fn otp_code(code: &'a str) -> Self {
        Self {
            otp_code: Some(code),
            ..Self::default()
        }
    }
}

#[must_use]
pub fn fill_placeholders(template: &str, values: &OtpPlaceholders<'_>) -> String {
    let mut message = template.to_string();
    for (token, value) in [
        (OTP_CODE_PLACEHOLDER, values.otp_code),
        (ACTION_NAME_PLACEHOLDER, values.action_name),
        (CLIENT_NAME_PLACEHOLDER, values.client_name),
    ] {
        if let Some(value) = value {
            message = message.replace(token, value);
        }
    }
    message
}
