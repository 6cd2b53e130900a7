pub mod message;
pub mod provider;
pub mod smtp_config;
