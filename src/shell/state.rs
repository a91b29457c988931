use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::modules::sign_up::use_cases::submit_sign_up::inbound::http::SignUpBehavior;
use crate::modules::sign_up::use_cases::submit_sign_up::payload::SignUpPayload;

#[derive(Clone, Default)]
pub struct AppState {
    behavior: Arc<RwLock<SignUpBehavior>>,
    received: Arc<Mutex<Vec<SignUpPayload>>>,
}

impl AppState {
    pub fn new(behavior: SignUpBehavior) -> Self {
        Self {
            behavior: Arc::new(RwLock::new(behavior)),
            received: Arc::default(),
        }
    }

    pub async fn behavior(&self) -> SignUpBehavior {
        self.behavior.read().await.clone()
    }

    /// Swaps the reply for every following request.
    pub async fn set_behavior(&self, behavior: SignUpBehavior) {
        *self.behavior.write().await = behavior;
    }

    pub async fn record(&self, payload: SignUpPayload) {
        self.received.lock().await.push(payload);
    }

    pub async fn received(&self) -> Vec<SignUpPayload> {
        self.received.lock().await.clone()
    }
}
