use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::modules::sign_up::core::submission::{CreatedUser, SubmissionResult};
use crate::modules::sign_up::use_cases::edit_form::controller::SignUpForm;
use crate::modules::sign_up::use_cases::submit_sign_up::gateway_port::SignUpGateway;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit control was disabled; nothing was sent.
    Ignored,
    /// Carries the account when the server echoed it back.
    Succeeded(Option<CreatedUser>),
    Failed,
}

pub struct SubmitSignUpHandler<TGateway>
where
    TGateway: SignUpGateway + 'static,
{
    form: Arc<Mutex<SignUpForm>>,
    gateway: Arc<TGateway>,
}

impl<TGateway> SubmitSignUpHandler<TGateway>
where
    TGateway: SignUpGateway + 'static,
{
    pub fn new(form: Arc<Mutex<SignUpForm>>, gateway: Arc<TGateway>) -> Self {
        Self { form, gateway }
    }

    pub fn form(&self) -> Arc<Mutex<SignUpForm>> {
        self.form.clone()
    }

    /// Runs one submission to completion. The form lock is released while the
    /// request is in flight so observers see the disabled submit control.
    pub async fn handle(&self) -> SubmitOutcome {
        let payload = {
            let mut form = self.form.lock().await;
            match form.begin_submission() {
                Some(payload) => payload,
                None => {
                    tracing::debug!("submit ignored: control disabled");
                    return SubmitOutcome::Ignored;
                }
            }
        };

        tracing::info!(username = %payload.username, email = %payload.email, "submitting sign-up");
        let result = SubmissionResult::from(self.gateway.submit(&payload).await);

        let outcome = match &result {
            SubmissionResult::Success { user, .. } => {
                let user_id = user.as_ref().map(|user| user.id.as_str());
                tracing::info!(user_id = ?user_id, "sign-up succeeded");
                SubmitOutcome::Succeeded(user.clone())
            }
            SubmissionResult::Failure {
                status_code,
                message,
            } => {
                tracing::warn!(status = ?status_code, reason = %message, "sign-up failed");
                SubmitOutcome::Failed
            }
        };

        self.form
            .lock()
            .await
            .complete_submission(result, Instant::now());
        outcome
    }
}
