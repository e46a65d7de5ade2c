//! Environment-supplied settings for the suite.
//!
//! Values are read once from the process environment after a `.env` file (if any)
//! has been loaded. Every setting has a documented default except the API key.

use crate::common::ApiTestError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://li.quest/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_QUOTE_MAX_MS: u64 = 2_000;
pub const DEFAULT_ROUTES_MAX_MS: u64 = 3_000;
pub const DEFAULT_TARGET_PERCENTILE: f64 = 0.95;

/// Loads variables from a `.env` file in the working directory, if present.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://li.quest/v1`.
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
    /// Sent as `x-lifi-api-key` when present.
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            api_key: None,
        }
    }
}

impl ApiConfig {
    /// `LIFI_BASE_URL`, `API_TIMEOUT` (ms) and `LIFI_API_KEY`.
    pub fn from_env() -> Result<Self, ApiTestError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiTestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = non_blank(lookup("LIFI_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_ms = parse_millis(lookup("API_TIMEOUT"), "API_TIMEOUT", DEFAULT_TIMEOUT_MS)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            api_key: non_blank(lookup("LIFI_API_KEY")),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Latency thresholds for the load probes.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyBudget {
    pub quote: Duration,
    pub routes: Duration,
    /// Share of successful calls that must land under the threshold.
    pub target_percentile: f64,
}

impl Default for LatencyBudget {
    fn default() -> Self {
        Self {
            quote: Duration::from_millis(DEFAULT_QUOTE_MAX_MS),
            routes: Duration::from_millis(DEFAULT_ROUTES_MAX_MS),
            target_percentile: DEFAULT_TARGET_PERCENTILE,
        }
    }
}

impl LatencyBudget {
    /// `PERF_QUOTE_MAX_MS` and `PERF_ROUTES_MAX_MS`.
    pub fn from_env() -> Result<Self, ApiTestError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiTestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            quote: Duration::from_millis(parse_millis(
                lookup("PERF_QUOTE_MAX_MS"),
                "PERF_QUOTE_MAX_MS",
                DEFAULT_QUOTE_MAX_MS,
            )?),
            routes: Duration::from_millis(parse_millis(
                lookup("PERF_ROUTES_MAX_MS"),
                "PERF_ROUTES_MAX_MS",
                DEFAULT_ROUTES_MAX_MS,
            )?),
            target_percentile: DEFAULT_TARGET_PERCENTILE,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_millis(value: Option<String>, name: &str, default: u64) -> Result<u64, ApiTestError> {
    let Some(raw) = non_blank(value) else {
        return Ok(default);
    };
    match raw.parse::<u64>() {
        Ok(0) => Err(ApiTestError::ConfigError(format!("{} must be greater than zero", name))),
        Ok(ms) => Ok(ms),
        Err(_) => Err(ApiTestError::ConfigError(format!(
            "Invalid {} value '{}': expected milliseconds",
            name, raw
        ))),
    }
}
