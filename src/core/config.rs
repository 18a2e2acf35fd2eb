use std::env;

use validator::Validate;

use crate::shared::constants::{DEFAULT_DEVICE_NAME, DEFAULT_TICKET_PRICE};

#[derive(Debug, Clone)]
pub struct Config {
    pub device: DeviceConfig,
}

/// Settings for the single ticket device served by this process
#[derive(Debug, Clone, Validate)]
pub struct DeviceConfig {
    #[validate(length(min = 1, max = 64, message = "DEVICE_NAME must be 1-64 characters"))]
    pub name: String,

    #[validate(range(min = 1, message = "TICKET_PRICE must be positive"))]
    pub price: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            device: DeviceConfig::from_env()?,
        })
    }
}

impl DeviceConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("DEVICE_NAME").unwrap_or_else(|| DEFAULT_DEVICE_NAME.to_string());

        let price = match lookup("TICKET_PRICE") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("Invalid TICKET_PRICE: {}", e))?,
            None => DEFAULT_TICKET_PRICE,
        };

        let config = Self { name, price };
        config.validate().map_err(|e| e.to_string())?;

        Ok(config)
    }
}
