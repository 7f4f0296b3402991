//! The issuance seam between sessions and the provisioning service.

use crate::error::ProvisionResult;
use crate::request::{ConfigGrant, ConfigRequest};
use async_trait::async_trait;

/// Performs the credential-for-token exchange.
///
/// Implementations must be stateless across calls and must not retry: each
/// call is exactly one attempt, and its failure is reported as-is.
#[async_trait]
pub trait ProvisioningClient: Send + Sync {
    /// Exchanges the request for a configuration token.
    async fn request_config(&self, request: &ConfigRequest) -> ProvisionResult<ConfigGrant>;
}
