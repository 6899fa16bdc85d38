//! Runtime configuration loaded from the environment.

use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_PORT: &str = "8000";
const DEFAULT_API_URL: &str = "http://localhost:8086/api";
const DEFAULT_DELIVERY_API_URL: &str = "http://localhost:8083/api";
const DEFAULT_USER_ID: &str = "1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Backend locations and identity used by every outgoing request.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the gateway serving restaurants, menus, orders and reviews.
    pub api_base_url: String,
    /// Base URL of the delivery service.
    pub delivery_api_base_url: String,
    /// Identity attached to created orders and reviews.
    pub user_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            api_base_url: DEFAULT_API_URL.to_string(),
            delivery_api_base_url: DEFAULT_DELIVERY_API_URL.to_string(),
            user_id: 1,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("FOOD_ORDER_PORT", DEFAULT_PORT)?,
            api_base_url: normalize_url(try_load("ORDER_API_URL", DEFAULT_API_URL)?),
            delivery_api_base_url: normalize_url(try_load(
                "DELIVERY_API_URL",
                DEFAULT_DELIVERY_API_URL,
            )?),
            user_id: try_load("ORDER_USER_ID", DEFAULT_USER_ID)?,
        })
    }

    /// Points both backends at the same base URL.
    pub fn with_backend(base_url: impl Into<String>) -> Self {
        let base_url = normalize_url(base_url.into());
        Self {
            api_base_url: base_url.clone(),
            delivery_api_base_url: base_url,
            ..Self::default()
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}

fn normalize_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
