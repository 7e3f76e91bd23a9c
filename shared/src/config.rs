//! Configuration management for Lambda functions.

use std::env;
use std::time::Duration;

use crate::{Error, Result};

/// Default nutrition API base URL.
pub const DEFAULT_FOOD_API_BASE_URL: &str = "http://indian-food.herokuapp.com/api";

/// Default timeout for a single nutrition API request, in seconds.
pub const DEFAULT_FOOD_API_TIMEOUT_SECS: u64 = 5;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Nutrition API base URL, without a trailing slash
    pub food_api_base_url: String,
    /// Timeout applied to each nutrition API request
    pub food_api_timeout: Duration,
    /// Expected skill application ID (check disabled when `None`)
    pub application_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let food_api_base_url = lookup("FOOD_API_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FOOD_API_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("FOOD_API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(Error::Config(
                        "FOOD_API_TIMEOUT_SECS must be greater than zero".to_string(),
                    ))
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(Error::Config(format!(
                        "Invalid FOOD_API_TIMEOUT_SECS '{}': {}",
                        raw, e
                    )))
                }
            },
            None => DEFAULT_FOOD_API_TIMEOUT_SECS,
        };

        let application_id = lookup("SKILL_APPLICATION_ID").filter(|id| !id.trim().is_empty());

        Ok(Self {
            food_api_base_url,
            food_api_timeout: Duration::from_secs(timeout_secs),
            application_id,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            food_api_base_url: DEFAULT_FOOD_API_BASE_URL.to_string(),
            food_api_timeout: Duration::from_secs(DEFAULT_FOOD_API_TIMEOUT_SECS),
            application_id: None,
        }
    }
}
