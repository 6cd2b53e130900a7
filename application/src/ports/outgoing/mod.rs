pub mod email_provider;
pub mod email_template;
pub mod mail_transport;
pub mod otp_sender;
