//! Error types for the provisioning client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for issuance operations.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Machine-readable category of an issuance failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Credential rejected; not retryable without a new credential.
    InvalidCredential,
    /// Supplied plan id unknown or expired; retry without it or with a fresh one.
    InvalidPlan,
    /// Transient transport failure; a new session may succeed.
    Network,
    /// Service-side failure; retry with backoff.
    ServerError,
    /// Unclassified.
    Unknown,
}

impl ErrorKind {
    /// Maps a wire error code onto a kind. Unrecognised codes are `Unknown`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "invalid_credential" => Self::InvalidCredential,
            "invalid_plan" => Self::InvalidPlan,
            "network" => Self::Network,
            "server_error" => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Returns the wire code for this kind.
    #[must_use]
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::InvalidCredential => "invalid_credential",
            Self::InvalidPlan => "invalid_plan",
            Self::Network => "network",
            Self::ServerError => "server_error",
            Self::Unknown => "unknown",
        }
    }
}

/// A classified issuance failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisionError {
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("invalid plan: {0}")]
    InvalidPlan(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("server error: {0}")]
    ServerError(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ProvisionError {
    /// Builds an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::InvalidCredential => Self::InvalidCredential(message),
            ErrorKind::InvalidPlan => Self::InvalidPlan(message),
            ErrorKind::Network => Self::Network(message),
            ErrorKind::ServerError => Self::ServerError(message),
            ErrorKind::Unknown => Self::Unknown(message),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredential(_) => ErrorKind::InvalidCredential,
            Self::InvalidPlan(_) => ErrorKind::InvalidPlan,
            Self::Network(_) => ErrorKind::Network,
            Self::ServerError(_) => ErrorKind::ServerError,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Returns the human-readable detail without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidCredential(m)
            | Self::InvalidPlan(m)
            | Self::Network(m)
            | Self::ServerError(m)
            | Self::Unknown(m) => m,
        }
    }
}

/// Errors raised while building a client, before any issuance happens.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
