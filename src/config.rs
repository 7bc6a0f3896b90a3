use std::env;
use std::time::Duration;

use tracing::info;

/// Base URL the client falls back to when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded from the environment with logged fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Read `FOODIE_API_URL` and `FOODIE_API_TIMEOUT_SECS`, defaulting each
    /// missing or unparsable value.
    pub fn load() -> Self {
        let base_url = env::var("FOODIE_API_URL").unwrap_or_else(|_| {
            info!("FOODIE_API_URL not set, using default: {DEFAULT_API_BASE}");
            DEFAULT_API_BASE.to_string()
        });

        let timeout = env::var("FOODIE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self { base_url, timeout }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
