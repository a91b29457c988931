use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// `user` is absent when the server accepted without echoing the account.
    Success {
        message: String,
        user: Option<CreatedUser>,
    },
    /// `status_code` is `None` when no response came back at all.
    Failure {
        status_code: Option<u16>,
        message: String,
    },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_in_flight(self) -> bool {
        self == SubmissionState::Submitting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    Started,
    Completed { success: bool },
    Dismissed,
}

pub fn evolve(state: SubmissionState, event: SubmissionEvent) -> SubmissionState {
    match (state, event) {
        (
            SubmissionState::Idle | SubmissionState::Succeeded | SubmissionState::Failed,
            SubmissionEvent::Started,
        ) => SubmissionState::Submitting,
        (SubmissionState::Submitting, SubmissionEvent::Completed { success: true }) => {
            SubmissionState::Succeeded
        }
        (SubmissionState::Submitting, SubmissionEvent::Completed { success: false }) => {
            SubmissionState::Failed
        }
        (SubmissionState::Succeeded | SubmissionState::Failed, SubmissionEvent::Dismissed) => {
            SubmissionState::Idle
        }
        (state, _) => state,
    }
}
