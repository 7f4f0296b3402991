//! Shared test helpers for session tests.

#![allow(dead_code)]

use async_trait::async_trait;
use configid_session::{
    CompletionHandler, ConfigGrant, ConfigRequest, ConfigSession, PlanId, ProvisionError,
    ProvisionResult, ProvisioningClient, Token,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, Notify};

/// How a [`FakeClient`] answers.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Fixed token and plan.
    Grant { token: String, plan_id: Option<String> },
    /// Fresh token, plus a fresh plan when none was requested.
    Allocate,
    /// Fixed failure.
    Fail(ProvisionError),
}

/// In-memory provisioning client that records every request.
pub struct FakeClient {
    answer: Answer,
    calls: AtomicUsize,
    requests: Mutex<Vec<ConfigRequest>>,
    gate: Option<Arc<Notify>>,
}

impl FakeClient {
    pub fn new(answer: Answer) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            gate: None,
        })
    }

    /// Client that holds every answer until `gate.notify_one()` is called.
    pub fn gated(answer: Answer, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            gate: Some(gate),
        })
    }

    pub fn granting(token: &str, plan_id: Option<&str>) -> Arc<Self> {
        Self::new(Answer::Grant {
            token: token.to_string(),
            plan_id: plan_id.map(str::to_string),
        })
    }

    pub fn failing(error: ProvisionError) -> Arc<Self> {
        Self::new(Answer::Fail(error))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ConfigRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProvisioningClient for FakeClient {
    async fn request_config(&self, request: &ConfigRequest) -> ProvisionResult<ConfigGrant> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.answer {
            Answer::Grant { token, plan_id } => Ok(ConfigGrant::new(
                Token::from(token.as_str()),
                plan_id.as_deref().map(PlanId::from),
            )),
            Answer::Allocate => {
                let plan_id = match &request.plan_id {
                    Some(_) => None,
                    None => Some(PlanId::new(uuid::Uuid::now_v7().to_string())),
                };
                Ok(ConfigGrant::new(
                    Token::new(uuid::Uuid::new_v4().to_string()),
                    plan_id,
                ))
            }
            Answer::Fail(e) => Err(e.clone()),
        }
    }
}

/// What a completion handler observed.
#[derive(Debug, Clone)]
pub struct Completion {
    pub token: Option<Token>,
    pub plan_id: Option<PlanId>,
    pub active: bool,
    pub error: Option<ProvisionError>,
}

/// Builds a handler that forwards each invocation to the returned channel.
pub fn channel_handler() -> (CompletionHandler, mpsc::UnboundedReceiver<Completion>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handler: CompletionHandler = Box::new(move |session: &ConfigSession, error: Option<&ProvisionError>| {
        let _ = tx.send(Completion {
            token: session.token(),
            plan_id: session.plan_id(),
            active: session.is_active(),
            error: error.cloned(),
        });
    });
    (handler, rx)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
