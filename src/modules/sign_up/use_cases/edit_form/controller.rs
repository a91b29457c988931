use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::modules::sign_up::core::fields::{Field, FormState};
use crate::modules::sign_up::core::intents::SignUpIntent;
use crate::modules::sign_up::core::notification::{DEFAULT_NOTIFICATION_TTL, Notification};
use crate::modules::sign_up::core::submission::{SubmissionEvent, SubmissionResult, evolve};
use crate::modules::sign_up::core::validation::{
    ValidationError, validate_email, validate_field, validate_password,
};
use crate::modules::sign_up::use_cases::submit_sign_up::payload::SignUpPayload;
use crate::shared::config::Settings;

/// State of one mounted sign-up form: inputs, inline errors, the submission
/// state machine, the outcome notification and queued navigation.
#[derive(Debug)]
pub struct SignUpForm {
    state: FormState,
    errors: HashMap<Field, ValidationError>,
    notification: Option<Notification>,
    intents: Vec<SignUpIntent>,
    notification_ttl: Duration,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl SignUpForm {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            state: FormState::default(),
            errors: HashMap::new(),
            notification: None,
            intents: Vec::new(),
            notification_ttl,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.notification_ttl)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field(&self, field: Field) -> &str {
        self.state.value(field)
    }

    /// Keystroke handler. Inline errors are only recomputed on blur.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value.into());
    }

    /// Focus-loss handler: validates `field` and records or clears its inline error.
    pub fn blur(&mut self, field: Field) -> Option<&ValidationError> {
        match validate_field(field, self.state.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                None
            }
            Err(err) => {
                tracing::debug!(field = field.label(), error = %err, "field failed validation");
                self.errors.insert(field, err);
                self.errors.get(&field)
            }
        }
    }

    pub fn field_error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn is_form_valid(&self) -> bool {
        !self.state.username.is_empty()
            && validate_email(&self.state.email).is_ok()
            && validate_password(&self.state.password).is_ok()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.is_form_valid() && !self.is_submitting()
    }

    /// Moves to `Submitting` and hands back the values to send, or `None`
    /// when the submit control is disabled.
    pub fn begin_submission(&mut self) -> Option<SignUpPayload> {
        if !self.is_submit_enabled() {
            return None;
        }
        self.notification = None;
        self.state.submission = evolve(self.state.submission, SubmissionEvent::Started);
        Some(SignUpPayload {
            username: self.state.username.clone(),
            email: self.state.email.clone(),
            password: self.state.password.clone(),
        })
    }

    pub fn complete_submission(&mut self, result: SubmissionResult, now: Instant) {
        if !self.is_submitting() {
            tracing::warn!("submission result arrived with nothing in flight; ignoring");
            return;
        }
        self.state.submission = evolve(
            self.state.submission,
            SubmissionEvent::Completed {
                success: result.is_success(),
            },
        );
        match result {
            SubmissionResult::Success { .. } => {
                self.reset();
                self.notification = Some(Notification::success(now, self.notification_ttl));
                self.intents.push(SignUpIntent::navigate_home());
            }
            SubmissionResult::Failure { .. } => {
                self.notification = Some(Notification::error(now, self.notification_ttl));
            }
        }
    }

    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|notification| notification.is_visible_at(now))
    }

    /// Auto-dismiss tick. Drops an expired notification and settles the
    /// submission state machine back to `Idle`.
    pub fn dismiss_expired(&mut self, now: Instant) {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|notification| !notification.is_visible_at(now));
        if expired {
            self.notification = None;
            self.state.submission = evolve(self.state.submission, SubmissionEvent::Dismissed);
        }
    }

    pub fn reset(&mut self) {
        self.state.clear_fields();
        self.errors.clear();
    }

    pub fn take_intents(&mut self) -> Vec<SignUpIntent> {
        std::mem::take(&mut self.intents)
    }
}
