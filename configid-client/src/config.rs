//! Client configuration.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default provisioning service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.electricimp.com/v5";

/// Settings for [`HttpProvisioningClient`](crate::HttpProvisioningClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the provisioning service; `/configs` is appended.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP/TLS connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: concat!("configid/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a config pointing at `base_url` with default timeouts.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Checks the settings and returns the resolved `/configs` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if the base URL does not parse,
    /// is not http(s), or a timeout is zero.
    pub fn configs_endpoint(&self) -> Result<Url, ClientError> {
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeouts must be greater than zero".to_string(),
            ));
        }

        let base = self.base_url.trim().trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/configs")).map_err(|e| {
            ClientError::InvalidConfig(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;

        match endpoint.scheme() {
            "http" | "https" => Ok(endpoint),
            other => Err(ClientError::InvalidConfig(format!(
                "unsupported URL scheme: {other}"
            ))),
        }
    }
}
