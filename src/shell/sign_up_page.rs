use std::sync::Arc;

use tokio::sync::Mutex;

use crate::modules::sign_up::adapters::outbound::http_gateway::HttpSignUpGateway;
use crate::modules::sign_up::use_cases::edit_form::controller::SignUpForm;
use crate::modules::sign_up::use_cases::submit_sign_up::gateway_port::SubmitError;
use crate::modules::sign_up::use_cases::submit_sign_up::handler::SubmitSignUpHandler;
use crate::shared::config::Settings;

pub type SignUpPage = SubmitSignUpHandler<HttpSignUpGateway>;

/// Wires a fresh form to the HTTP gateway: base URL and request timeout for
/// the gateway, notification TTL for the form.
pub fn mount_sign_up_page(settings: &Settings) -> Result<SignUpPage, SubmitError> {
    let gateway = HttpSignUpGateway::from_settings(settings)?;
    let form = SignUpForm::from_settings(settings);
    Ok(SubmitSignUpHandler::new(
        Arc::new(Mutex::new(form)),
        Arc::new(gateway),
    ))
}
