//! HTTP implementation of [`ProvisioningClient`].

use crate::client::ProvisioningClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ErrorKind, ProvisionError, ProvisionResult};
use crate::request::{ConfigGrant, ConfigRequest};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Failure body returned by the service.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Talks to the provisioning service over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpProvisioningClient {
    client: Client,
    endpoint: Url,
}

impl HttpProvisioningClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP stack cannot be
    /// initialised.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint = config.configs_endpoint()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Returns the resolved `/configs` endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProvisioningClient for HttpProvisioningClient {
    async fn request_config(&self, request: &ConfigRequest) -> ProvisionResult<ConfigGrant> {
        request.validate()?;

        debug!(
            endpoint = %self.endpoint,
            reuse_plan = request.plan_id.is_some(),
            "Requesting configuration token"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ProvisionError::Network(format!("config request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = classify_failure(status, &body, request.plan_id.is_some());
            warn!(
                status = status.as_u16(),
                kind = error.kind().as_code(),
                "Configuration request rejected"
            );
            return Err(error);
        }

        let grant: ConfigGrant = response.json().await.map_err(|e| {
            if e.is_decode() {
                ProvisionError::ServerError(format!("malformed config response: {e}"))
            } else {
                ProvisionError::Network(format!("failed to read config response: {e}"))
            }
        })?;

        if grant.token.is_empty() {
            return Err(ProvisionError::ServerError(
                "config response contained an empty token".to_string(),
            ));
        }

        Ok(grant)
    }
}

/// Maps a non-2xx response onto the error taxonomy.
///
/// An explicit `code` in the body wins; otherwise the status decides.
fn classify_failure(status: StatusCode, body: &str, plan_supplied: bool) -> ProvisionError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"));

    let kind = match parsed.code {
        Some(code) => ErrorKind::from_code(&code),
        None => match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorKind::InvalidCredential,
            StatusCode::NOT_FOUND | StatusCode::GONE if plan_supplied => ErrorKind::InvalidPlan,
            s if s.is_server_error() => ErrorKind::ServerError,
            _ => ErrorKind::Unknown,
        },
    };

    ProvisionError::new(kind, message)
}
