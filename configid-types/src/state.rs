//! Activation state of a configuration session.

use serde::{Deserialize, Serialize};

/// Where a session is in its single issuance attempt.
///
/// `Pending` holds strictly before the exchange completes; afterwards exactly
/// one of `Active` or `Failed` holds for the rest of the session's life.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationState {
    /// Issuance has not completed yet.
    #[default]
    Pending,
    /// A token was issued and is usable.
    Active,
    /// Issuance completed with an error; no usable token.
    Failed,
}

impl ActivationState {
    /// Returns true if the session holds a usable token.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns true once issuance has completed, successfully or not.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
