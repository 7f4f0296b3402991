//! The configuration session façade.

use crate::state::Issuance;
use chrono::{DateTime, Utc};
use configid_client::{ConfigRequest, ProvisionError, ProvisioningClient};
use configid_types::{ActivationState, ApiKey, PlanId, Token};
use std::fmt;
use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tracing::{debug, info, warn};

/// Called once when issuance completes. `None` means the session is active.
pub type CompletionHandler =
    Box<dyn FnOnce(&ConfigSession, Option<&ProvisionError>) + Send + 'static>;

/// Values fixed at construction.
struct Fixed {
    api_key: ApiKey,
    requested_plan: Option<PlanId>,
}

/// One configuration attempt and its token.
///
/// Issuance starts inside the constructor and runs exactly once. The session
/// is `Pending` until it completes, then `Active` or `Failed` for the rest of
/// its life. Dropping the session does not cancel issuance or notify the
/// service; a late completion is simply not observed.
pub struct ConfigSession {
    fixed: Arc<Fixed>,
    state: watch::Receiver<Issuance>,
}

impl ConfigSession {
    /// Starts a session, reusing `plan_id` if given or asking the service
    /// for a new plan otherwise.
    ///
    /// Returns immediately in [`ActivationState::Pending`]. Issuance errors
    /// are never returned here; they arrive through `on_complete`,
    /// [`completed`](Self::completed) and [`error`](Self::error).
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn new(
        client: Arc<dyn ProvisioningClient>,
        api_key: ApiKey,
        plan_id: Option<PlanId>,
        on_complete: Option<CompletionHandler>,
    ) -> Self {
        let fixed = Arc::new(Fixed {
            api_key,
            requested_plan: plan_id,
        });
        let (tx, rx) = watch::channel(Issuance::Pending);

        // Held until this function returns, so the handler cannot run first.
        let (_release_tx, release_rx) = oneshot::channel::<()>();

        let task_view = Self {
            fixed: Arc::clone(&fixed),
            state: rx.clone(),
        };
        let request = ConfigRequest::new(fixed.api_key.clone(), fixed.requested_plan.clone());

        debug!(
            reuse_plan = request.plan_id.is_some(),
            "Starting configuration session"
        );

        tokio::spawn(run_issuance(
            client,
            request,
            IssuanceGuard { tx },
            release_rx,
            task_view,
            on_complete,
        ));

        Self { fixed, state: rx }
    }

    /// Starts a session that asks the service to allocate a new plan.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn with_new_plan(
        client: Arc<dyn ProvisioningClient>,
        api_key: ApiKey,
        on_complete: Option<CompletionHandler>,
    ) -> Self {
        Self::new(client, api_key, None, on_complete)
    }

    /// Starts a session under an existing plan previously issued by the
    /// service.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn with_existing_plan(
        client: Arc<dyn ProvisioningClient>,
        api_key: ApiKey,
        plan_id: PlanId,
        on_complete: Option<CompletionHandler>,
    ) -> Self {
        Self::new(client, api_key, Some(plan_id), on_complete)
    }

    /// Waits for issuance to finish.
    ///
    /// Resolves with the same outcome the completion handler receives. Safe
    /// to call repeatedly and from several tasks; it never starts another
    /// exchange.
    ///
    /// # Errors
    ///
    /// Returns the issuance error if the session ended `Failed`.
    pub async fn completed(&self) -> Result<(), ProvisionError> {
        let mut rx = self.state.clone();
        // The guard always writes a terminal state before the sender goes
        // away, so the final value below is authoritative either way.
        let _ = rx.wait_for(Issuance::is_terminal).await;

        match &*self.state.borrow() {
            Issuance::Active { .. } => Ok(()),
            Issuance::Failed(e) => Err(e.clone()),
            Issuance::Pending => Err(ProvisionError::Unknown(
                "issuance ended without a result".to_string(),
            )),
        }
    }

    /// The credential this session was created with.
    #[must_use]
    pub fn api_key(&self) -> &ApiKey {
        &self.fixed.api_key
    }

    /// The plan in effect.
    ///
    /// The supplied plan id is returned from construction onwards. Without
    /// one, this is `None` until the service allocates a plan.
    #[must_use]
    pub fn plan_id(&self) -> Option<PlanId> {
        if let Some(plan) = &self.fixed.requested_plan {
            return Some(plan.clone());
        }
        match &*self.state.borrow() {
            Issuance::Active { plan_id, .. } => Some(plan_id.clone()),
            _ => None,
        }
    }

    /// The one-time configuration token, once active.
    #[must_use]
    pub fn token(&self) -> Option<Token> {
        match &*self.state.borrow() {
            Issuance::Active { token, .. } => Some(token.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn state(&self) -> ActivationState {
        self.state.borrow().activation_state()
    }

    /// True when the token is ready to hand to the device.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// The issuance error, once failed.
    #[must_use]
    pub fn error(&self) -> Option<ProvisionError> {
        self.state.borrow().error().cloned()
    }

    /// When the token was received.
    #[must_use]
    pub fn activated_at(&self) -> Option<DateTime<Utc>> {
        match &*self.state.borrow() {
            Issuance::Active { activated_at, .. } => Some(*activated_at),
            _ => None,
        }
    }

    /// Token expiry as advertised by the service. Informational only.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match &*self.state.borrow() {
            Issuance::Active { expires_at, .. } => *expires_at,
            _ => None,
        }
    }
}

impl fmt::Debug for ConfigSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigSession")
            .field("api_key", &self.fixed.api_key)
            .field("plan_id", &self.plan_id())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Sole writer of a session's state.
///
/// Records `Failed` on drop if the task is torn down before a result.
struct IssuanceGuard {
    tx: watch::Sender<Issuance>,
}

impl IssuanceGuard {
    fn resolve(&self, next: Issuance) -> bool {
        self.tx.send_if_modified(|state| state.resolve(next))
    }
}

impl Drop for IssuanceGuard {
    fn drop(&mut self) {
        let abandoned = Issuance::Failed(ProvisionError::Unknown(
            "issuance task ended before completing".to_string(),
        ));
        if self.resolve(abandoned) {
            warn!("Configuration session abandoned before issuance completed");
        }
    }
}

async fn run_issuance(
    client: Arc<dyn ProvisioningClient>,
    request: ConfigRequest,
    guard: IssuanceGuard,
    release: oneshot::Receiver<()>,
    session: ConfigSession,
    on_complete: Option<CompletionHandler>,
) {
    let result = client.request_config(&request).await;
    let outcome = Issuance::from_result(request.plan_id.as_ref(), result);

    match &outcome {
        Issuance::Active { plan_id, .. } => {
            info!(plan_id = %plan_id, "Configuration session active");
        }
        Issuance::Failed(e) => {
            warn!(kind = e.kind().as_code(), error = %e, "Configuration session failed");
        }
        Issuance::Pending => {}
    }

    if !guard.resolve(outcome) {
        return;
    }

    // Errors once the constructor has dropped its end.
    let _ = release.await;

    if let Some(handler) = on_complete {
        let error = session.error();
        handler(&session, error.as_ref());
    }
}
