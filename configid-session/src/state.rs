//! Issuance state machine.
//!
//! `Pending` moves to `Active` or `Failed` at most once. The tagged variants
//! keep the token and the error mutually exclusive.

use chrono::{DateTime, Utc};
use configid_client::{ConfigGrant, ProvisionError, ProvisionResult};
use configid_types::{ActivationState, PlanId, Token};

#[derive(Debug, Clone)]
pub(crate) enum Issuance {
    Pending,
    Active {
        token: Token,
        plan_id: PlanId,
        activated_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    },
    Failed(ProvisionError),
}

impl Issuance {
    /// Turns the client's answer into a terminal state.
    ///
    /// A supplied plan id is kept as-is; the service's plan id only fills in
    /// when none was supplied. A grant without a token or a plan is a
    /// service fault.
    pub(crate) fn from_result(
        requested_plan: Option<&PlanId>,
        result: ProvisionResult<ConfigGrant>,
    ) -> Self {
        let grant = match result {
            Ok(grant) => grant,
            Err(e) => return Self::Failed(e),
        };

        if grant.token.is_empty() {
            return Self::Failed(ProvisionError::ServerError(
                "service issued an empty token".to_string(),
            ));
        }

        let plan_id = match requested_plan.cloned().or(grant.plan_id) {
            Some(plan) if !plan.is_empty() => plan,
            _ => {
                return Self::Failed(ProvisionError::ServerError(
                    "service did not allocate a plan id".to_string(),
                ));
            }
        };

        Self::Active {
            token: grant.token,
            plan_id,
            activated_at: Utc::now(),
            expires_at: grant.expires_at,
        }
    }

    /// Applies `next` if still pending. Returns whether the state changed.
    pub(crate) fn resolve(&mut self, next: Issuance) -> bool {
        if self.is_terminal() || matches!(next, Self::Pending) {
            return false;
        }
        *self = next;
        true
    }

    pub(crate) fn activation_state(&self) -> ActivationState {
        match self {
            Self::Pending => ActivationState::Pending,
            Self::Active { .. } => ActivationState::Active,
            Self::Failed(_) => ActivationState::Failed,
        }
    }

    pub(crate) fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub(crate) fn error(&self) -> Option<&ProvisionError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}
