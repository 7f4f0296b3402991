//! Single-use configuration sessions.
//!
//! A [`ConfigSession`] binds one device-configuration attempt to the
//! provisioning service. Constructing it starts the token exchange in the
//! background; the session reports `Pending` until the exchange completes and
//! then settles on `Active` (token usable) or `Failed` for good.
//!
//! # Lifecycle
//!
//! 1. The application constructs a session with its credential and, when
//!    configuring into an existing plan, that plan id
//! 2. Issuance runs on the Tokio runtime; the constructor returns at once
//! 3. On completion the optional handler fires exactly once, and
//!    [`ConfigSession::completed`] resolves for anyone awaiting it
//! 4. The token is handed to the device pairing transport
//!
//! Sessions are never retried or reused. To try again, construct a new one
//! (reusing the plan id is fine).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use configid_session::{ApiKey, ClientConfig, ConfigSession, HttpProvisioningClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(HttpProvisioningClient::new(ClientConfig::default())?);
//! let session = ConfigSession::with_new_plan(client, ApiKey::from("abc123"), None);
//!
//! session.completed().await?;
//! assert!(session.is_active());
//! # Ok(())
//! # }
//! ```

mod session;
mod state;

pub use session::{CompletionHandler, ConfigSession};

pub use configid_client::{
    ClientConfig, ClientError, ConfigGrant, ConfigRequest, ErrorKind, HttpProvisioningClient,
    ProvisionError, ProvisionResult, ProvisioningClient,
};
pub use configid_types::{ActivationState, ApiKey, PlanId, Token};
