use std::time::Duration;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::modules::sign_up::core::submission::CreatedUser;
use crate::modules::sign_up::use_cases::submit_sign_up::payload::{
    SignUpAccepted, SignUpPayload, SignUpRejectedBody,
};
use crate::shell::state::AppState;

/// How the mock endpoint answers the next requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignUpBehavior {
    #[default]
    Created,
    Delayed {
        delay: Duration,
    },
    /// `status` outside 4xx/5xx is answered as 500.
    Failing {
        status: u16,
        message: String,
    },
}

fn failure_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status)
        .ok()
        .filter(|status| status.is_client_error() || status.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignUpPayload>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "rejected malformed sign-up body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    state.record(body.clone()).await;

    match state.behavior().await {
        SignUpBehavior::Created => created(body),
        SignUpBehavior::Delayed { delay } => {
            tokio::time::sleep(delay).await;
            created(body)
        }
        SignUpBehavior::Failing { status, message } => {
            let status = failure_status(status);
            tracing::info!(%status, "answering sign-up with scripted failure");
            (status, Json(SignUpRejectedBody { message })).into_response()
        }
    }
}

fn created(body: SignUpPayload) -> Response {
    let user = CreatedUser {
        id: Uuid::now_v7().to_string(),
        username: body.username,
        email: body.email,
        password: body.password,
    };
    tracing::info!(user_id = %user.id, "sign-up created");
    (
        StatusCode::CREATED,
        Json(SignUpAccepted {
            message: "User created".to_string(),
            user: Some(user),
        }),
    )
        .into_response()
}
