#[cfg(any(
    feature = "adapters",
    feature = "reqwest",
    feature = "lettre",
    feature = "tera"
))]
compile_error!("application must not depend on adapters/transport crates");

pub mod email;
pub mod error;
pub mod infrastructure_config;
pub mod otp;
pub mod ports;
