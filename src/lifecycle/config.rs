//! Console configuration.
//!
//! The backend address is an explicit value handed to the service client at
//! construction. Defaults point at a local backend; environment
//! variables override them.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5003";

pub const ENV_BASE_URL: &str = "ORDER_ADMIN_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ORDER_ADMIN_TIMEOUT_SECS";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {name}: {value:?} is not a whole number of seconds")]
    InvalidTimeout { name: &'static str, value: String },

    #[error("Invalid {name}: a request timeout must be greater than zero")]
    ZeroTimeout { name: &'static str },

    #[error("Base URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    base_url: String,
    #[serde(rename = "request_timeout_secs", deserialize_with = "deserialize_timeout_secs")]
    request_timeout: Option<Duration>,
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<u64>::deserialize(deserializer)? {
        Some(0) => Err(serde::de::Error::custom(
            "request_timeout_secs must be greater than zero",
        )),
        secs => Ok(secs.map(Duration::from_secs)),
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl AdminConfig {
    /// Config for the service at `base_url`; a trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: None,
        }
    }

    /// A zero `timeout` clears it.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout).filter(|t| !t.is_zero());
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// `None` means requests may wait forever.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Defaults overridden by `ORDER_ADMIN_BASE_URL` and `ORDER_ADMIN_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            let base_url = base_url.trim().trim_end_matches('/');
            if base_url.is_empty() {
                return Err(ConfigError::EmptyBaseUrl);
            }
            config.base_url = base_url.to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    name: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout {
                    name: ENV_TIMEOUT_SECS,
                });
            }
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
