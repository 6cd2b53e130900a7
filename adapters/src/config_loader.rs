use courier_application::error::{AppError, AppResult};
use courier_application::infrastructure_config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::path::Path;

pub const ENV_PREFIX: &str = "COURIER_";

/// Defaults, then `courier.toml`, then `courier.json`, then `COURIER_*` variables
/// (`__` separates nesting, e.g. `COURIER_OTP__VENDOR`). A `.env` file is read first if present.
pub fn load_config() -> AppResult<Config> {
    dotenvy::dotenv().ok();

    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if Path::new("courier.toml").exists() {
        figment = figment.merge(Toml::file("courier.toml"));
    }

    if Path::new("courier.json").exists() {
        figment = figment.merge(Json::file("courier.json"));
    }

    extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

fn extract(figment: Figment) -> AppResult<Config> {
    let config: Config = figment.extract().map_err(|e| AppError::ConfigError {
        message: format!("Failed to load configuration: {e}"),
    })?;

    config.validate()?;
    Ok(config)
}
