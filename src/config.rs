//! Centralized configuration management for mahal

use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};

const DEFAULT_SERVER_URL: &str = "http://192.168.1.10:5000";
const DEFAULT_TIMEOUT_MS: u64 = 5000;
const DEFAULT_LOG_FILE: &str = "mahal.log";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the record service
    pub server_url: String,
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Reshape Arabic text before it reaches the terminal
    pub shape_text: bool,
    /// Log file used while the TUI owns the terminal
    pub log_file: PathBuf,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            http: HttpConfig::default(),
            shape_text: true,
            log_file: DEFAULT_LOG_FILE.into(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let server_url = std::env::var("MAHAL_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let http = HttpConfig {
            timeout_ms: parse_env_var("MAHAL_HTTP_TIMEOUT_MS")?.unwrap_or(DEFAULT_TIMEOUT_MS),
            user_agent: std::env::var("MAHAL_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
        };

        let shape_text = parse_env_var("MAHAL_SHAPE_TEXT")?.unwrap_or(true);

        let log_file = std::env::var("MAHAL_LOG_FILE")
            .unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
            .into();

        Ok(Config {
            server_url,
            http,
            shape_text,
            log_file,
        })
    }

    /// Base URL without a trailing slash, ready for `{base}/{endpoint}`
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http.timeout_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(self.base_url())
            .with_context(|| format!("Invalid server URL: {}", self.server_url))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow::anyhow!(
                "Server URL must use http or https: {}",
                self.server_url
            ));
        }

        if self.http.timeout_ms == 0 {
            return Err(anyhow::anyhow!("HTTP timeout must be greater than zero"));
        }

        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("mahal/{}", env!("CARGO_PKG_VERSION"))
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}
