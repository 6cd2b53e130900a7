pub mod otp_http;
pub mod smtp_lettre;
pub mod templates_tera;
