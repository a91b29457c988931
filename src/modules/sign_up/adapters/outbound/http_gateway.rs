use async_trait::async_trait;
use reqwest::Client;

use crate::modules::sign_up::use_cases::submit_sign_up::gateway_port::{
    SignUpGateway, SubmitError,
};
use crate::modules::sign_up::use_cases::submit_sign_up::payload::{
    SignUpAccepted, SignUpPayload, SignUpRejectedBody,
};
use crate::shared::config::Settings;

pub const SIGN_UP_PATH: &str = "/signup";

#[derive(Debug, Clone)]
pub struct HttpSignUpGateway {
    client: Client,
    base_url: String,
}

impl HttpSignUpGateway {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        Ok(Self::new(client, settings.api_base_url.clone()))
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SIGN_UP_PATH)
    }
}

#[async_trait]
impl SignUpGateway for HttpSignUpGateway {
    async fn submit(&self, payload: &SignUpPayload) -> Result<SignUpAccepted, SubmitError> {
        let endpoint = self.endpoint();
        tracing::debug!(%endpoint, "posting sign-up");

        let response = self
            .client
            .post(&endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return match response.json::<SignUpAccepted>().await {
                Ok(accepted) => Ok(accepted),
                Err(err) => {
                    tracing::debug!(%status, error = %err, "accepted without a readable body");
                    Ok(SignUpAccepted::default())
                }
            };
        }

        let message = match response.json::<SignUpRejectedBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
