//! Request and response bodies of the `/configs` exchange.

use crate::error::{ProvisionError, ProvisionResult};
use chrono::{DateTime, Utc};
use configid_types::{ApiKey, PlanId, Token};
use serde::{Deserialize, Serialize};

/// Input of one issuance exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRequest {
    /// Application credential.
    pub api_key: ApiKey,
    /// Existing plan to reuse; `None` asks the service to allocate one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<PlanId>,
}

impl ConfigRequest {
    #[must_use]
    pub fn new(api_key: ApiKey, plan_id: Option<PlanId>) -> Self {
        Self { api_key, plan_id }
    }

    /// Rejects requests the service would refuse anyway, without any I/O.
    ///
    /// # Errors
    ///
    /// `InvalidCredential` for an empty credential, `InvalidPlan` for an
    /// empty plan id.
    pub fn validate(&self) -> ProvisionResult<()> {
        if self.api_key.is_empty() {
            return Err(ProvisionError::InvalidCredential(
                "api key must not be empty".to_string(),
            ));
        }
        if self.plan_id.as_ref().is_some_and(PlanId::is_empty) {
            return Err(ProvisionError::InvalidPlan(
                "plan id must not be empty when supplied".to_string(),
            ));
        }
        Ok(())
    }
}

/// Successful result of one issuance exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigGrant {
    /// The one-time configuration token.
    pub token: Token,
    /// Plan the token belongs to. Always present when a new plan was
    /// allocated; the service may omit it when the caller supplied one.
    #[serde(default)]
    pub plan_id: Option<PlanId>,
    /// Server-advertised expiry of the token, if any.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ConfigGrant {
    /// Creates a grant with no advertised expiry.
    #[must_use]
    pub fn new(token: Token, plan_id: Option<PlanId>) -> Self {
        Self {
            token,
            plan_id,
            expires_at: None,
        }
    }
}
