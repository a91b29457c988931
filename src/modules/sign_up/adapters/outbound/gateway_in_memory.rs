use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify, watch};
use uuid::Uuid;

use crate::modules::sign_up::core::submission::CreatedUser;
use crate::modules::sign_up::use_cases::submit_sign_up::gateway_port::{
    SignUpGateway, SubmitError,
};
use crate::modules::sign_up::use_cases::submit_sign_up::payload::{SignUpAccepted, SignUpPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    Created,
    Rejected { status: u16, message: String },
    Unreachable,
}

/// Gateway double. Replies are consumed in order; once the script runs out
/// every request is answered with `Created`.
pub struct InMemorySignUpGateway {
    replies: Mutex<VecDeque<ScriptedReply>>,
    received: Mutex<Vec<SignUpPayload>>,
    arrivals: watch::Sender<usize>,
    gate: Mutex<Option<Arc<Notify>>>,
    latency: Option<Duration>,
}

impl Default for InMemorySignUpGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySignUpGateway {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            received: Mutex::new(Vec::new()),
            arrivals: watch::Sender::new(0),
            gate: Mutex::new(None),
            latency: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub async fn push_reply(&self, reply: ScriptedReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Holds every following request until the returned handle is notified,
    /// once per request.
    pub async fn hold_requests(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().await = Some(gate.clone());
        gate
    }

    pub async fn received(&self) -> Vec<SignUpPayload> {
        self.received.lock().await.clone()
    }

    pub async fn wait_for_requests(&self, count: usize) {
        let mut arrivals = self.arrivals.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = arrivals.wait_for(|seen| *seen >= count).await;
    }
}

#[async_trait]
impl SignUpGateway for InMemorySignUpGateway {
    async fn submit(&self, payload: &SignUpPayload) -> Result<SignUpAccepted, SubmitError> {
        self.received.lock().await.push(payload.clone());
        self.arrivals.send_modify(|seen| *seen += 1);

        let gate = self.gate.lock().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or(ScriptedReply::Created);
        match reply {
            ScriptedReply::Created => Ok(SignUpAccepted {
                message: "User created".to_string(),
                user: Some(CreatedUser {
                    id: Uuid::now_v7().to_string(),
                    username: payload.username.clone(),
                    email: payload.email.clone(),
                    password: payload.password.clone(),
                }),
            }),
            ScriptedReply::Rejected { status, message } => {
                Err(SubmitError::Rejected { status, message })
            }
            ScriptedReply::Unreachable => {
                Err(SubmitError::Transport("connection refused".to_string()))
            }
        }
    }
}
