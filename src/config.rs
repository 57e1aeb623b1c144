use std::env;

use thiserror::Error;

use crate::service::TransferMode;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 18080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Server settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_host: String,
    pub app_port: u16,
    pub transfer_mode: TransferMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: DEFAULT_HOST.to_string(),
            app_port: DEFAULT_PORT,
            transfer_mode: TransferMode::default(),
        }
    }
}

impl AppConfig {
    /// Reads `APP_HOST`, `APP_PORT` and `TRANSFER_MODE`; unset variables
    /// keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let app_host = lookup("APP_HOST").unwrap_or(defaults.app_host);
        let app_port = match lookup("APP_PORT") {
            Some(port) => port.parse::<u16>().map_err(|err| ConfigError::InvalidValue {
                key: "APP_PORT".to_string(),
                message: format!("{err}"),
            })?,
            None => defaults.app_port,
        };
        let transfer_mode = match lookup("TRANSFER_MODE") {
            Some(mode) => mode.parse::<TransferMode>().map_err(|err| ConfigError::InvalidValue {
                key: "TRANSFER_MODE".to_string(),
                message: format!("{err}"),
            })?,
            None => defaults.transfer_mode,
        };
        Ok(Self {
            app_host,
            app_port,
            transfer_mode,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}
