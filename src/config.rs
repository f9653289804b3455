use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the prediction service, without trailing slash.
    pub api_url: String,
    /// Whole-request timeout for prediction calls.
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Build config from `EXOQUEST_API_URL` and `EXOQUEST_TIMEOUT_SECS`
    /// (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_url = get("EXOQUEST_API_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_url);
        let timeout = get("EXOQUEST_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        Self { api_url, timeout }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/api/predict", self.api_url)
    }

    pub fn models_url(&self) -> String {
        format!("{}/api/models", self.api_url)
    }
}
