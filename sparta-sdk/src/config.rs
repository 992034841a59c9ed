use std::env;

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the gateway lives and how long a single request may take.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the gateway, without the `/api/v1` prefix.
    pub gateway_url: String,
    /// Fixed transport-level timeout applied to every request.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// `SPARTA_GATEWAY_URL` names the gateway; `SPARTA_REQUEST_TIMEOUT`
    /// overrides the timeout in seconds. Unparseable values fall back.
    pub fn from_env() -> Self {
        let gateway_url = env::var("SPARTA_GATEWAY_URL")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let request_timeout_secs = env::var("SPARTA_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            gateway_url,
            request_timeout_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
