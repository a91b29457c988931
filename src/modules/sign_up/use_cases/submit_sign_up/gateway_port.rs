use async_trait::async_trait;
use thiserror::Error;

use crate::modules::sign_up::core::submission::SubmissionResult;
use crate::modules::sign_up::use_cases::submit_sign_up::payload::{SignUpAccepted, SignUpPayload};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("sign-up rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

impl SubmitError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Rejected { status, .. } => Some(*status),
            SubmitError::Transport(_) => None,
        }
    }
}

#[async_trait]
pub trait SignUpGateway: Send + Sync {
    async fn submit(&self, payload: &SignUpPayload) -> Result<SignUpAccepted, SubmitError>;
}

impl From<Result<SignUpAccepted, SubmitError>> for SubmissionResult {
    fn from(result: Result<SignUpAccepted, SubmitError>) -> Self {
        match result {
            Ok(accepted) => SubmissionResult::Success {
                message: accepted.message,
                user: accepted.user,
            },
            Err(err) => SubmissionResult::Failure {
                status_code: err.status(),
                message: err.to_string(),
            },
        }
    }
}
