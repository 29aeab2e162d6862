//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::transport::RetryPolicy;

/// Automation webhook that receives the booking payload.
pub const DEFAULT_WEBHOOK_URL: &str = "https://hook.eu2.make.com/0ny7ghk18on6y532rg2zdy1mjf47vhy2";

/// Voice-agent platform API root.
pub const DEFAULT_VAPI_BASE_URL: &str = "https://api.vapi.ai";

/// Relay configuration, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bearer credential for the voice-agent platform.
    pub vapi_api_key: SecretString,
    /// Listen host.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Stage-1 automation webhook.
    pub webhook_url: String,
    /// Base URL for the tool and assistant endpoints.
    pub vapi_base_url: String,
    /// Timeout applied to every outbound call.
    pub request_timeout: Duration,
    /// Retry policy for transient transport errors.
    pub retry: RetryPolicy,
    /// Delete the provisioned tool when assistant creation fails.
    pub cleanup_orphaned_tools: bool,
}

impl RelayConfig {
    /// Build a config around an API key, with every other field at its default.
    pub fn new(vapi_api_key: impl Into<String>) -> Self {
        Self {
            vapi_api_key: SecretString::from(vapi_api_key.into()),
            host: "0.0.0.0".to_string(),
            port: 8000,
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            vapi_base_url: DEFAULT_VAPI_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            cleanup_orphaned_tools: false,
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("VAPI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("VAPI_API_KEY".to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(host) = lookup("BOOKING_RELAY_HOST") {
            config.host = host;
        }
        if let Some(port) = parse_var(&lookup, "BOOKING_RELAY_PORT")? {
            config.port = port;
        }
        if let Some(url) = lookup("BOOKING_RELAY_WEBHOOK_URL") {
            config.webhook_url = url;
        }
        if let Some(url) = lookup("VAPI_BASE_URL") {
            config.vapi_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "BOOKING_RELAY_TIMEOUT_SECS")? {
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "BOOKING_RELAY_TIMEOUT_SECS".to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = parse_var(&lookup, "BOOKING_RELAY_MAX_RETRIES")? {
            config.retry.max_retries = retries;
        }
        if let Some(read_timeouts) = parse_var(&lookup, "BOOKING_RELAY_RETRY_READ_TIMEOUTS")? {
            config.retry.retry_read_timeouts = read_timeouts;
        }
        if let Some(cleanup) = parse_var(&lookup, "BOOKING_RELAY_CLEANUP_ORPHANED_TOOLS")? {
            config.cleanup_orphaned_tools = cleanup;
        }

        Ok(config)
    }

    /// Tool-registration endpoint.
    pub fn tool_url(&self) -> String {
        format!("{}/tool", self.vapi_base_url)
    }

    /// Assistant-creation endpoint.
    pub fn assistant_url(&self) -> String {
        format!("{}/assistant", self.vapi_base_url)
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{raw:?}: {e}"),
            }),
    }
}
