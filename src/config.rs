use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub fn load_client_config() -> Result<ClientConfig> {
    let base_url = env::var("PM_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let timeout_secs = env::var("PM_REQUEST_TIMEOUT_SECS")
        .ok()
        .map(|value| value.trim().parse::<u64>())
        .transpose()
        .context("Failed to parse PM_REQUEST_TIMEOUT_SECS")?
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(ClientConfig {
        base_url: normalize_base_url(base_url),
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn normalize_base_url(value: String) -> String {
    value.trim().trim_end_matches('/').to_string()
}
