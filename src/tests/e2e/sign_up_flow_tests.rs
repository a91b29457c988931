// Full sign-up flow: form controller, submit handler, reqwest gateway and the
// mock endpoint served on a real socket.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{StatusCode, header},
    routing::post,
};
use reqwest::Client;
use rstest::rstest;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::modules::sign_up::adapters::outbound::http_gateway::HttpSignUpGateway;
use crate::modules::sign_up::core::fields::{Field, FormState};
use crate::modules::sign_up::core::intents::SignUpIntent;
use crate::modules::sign_up::core::notification::NotificationKind;
use crate::modules::sign_up::use_cases::edit_form::controller::SignUpForm;
use crate::modules::sign_up::use_cases::submit_sign_up::handler::{
    SubmitOutcome, SubmitSignUpHandler,
};
use crate::modules::sign_up::use_cases::submit_sign_up::inbound::http::SignUpBehavior;
use crate::shell::state::AppState;
use crate::tests::fixtures::{fill_form, spawn_mock_server};

const FULL_BODY: &str = r#"{"message":"User created","user":{"id":"123","username":"Hasan","email":"hasan@gmail.com","password":"strongoonee"}}"#;

async fn mount(
    state: &AppState,
    timeout: Duration,
) -> (
    Arc<Mutex<SignUpForm>>,
    Arc<SubmitSignUpHandler<HttpSignUpGateway>>,
) {
    let base_url = spawn_mock_server(state.clone()).await;
    let client = Client::builder().timeout(timeout).build().unwrap();
    let gateway = Arc::new(HttpSignUpGateway::new(client, base_url));
    let form = Arc::new(Mutex::new(SignUpForm::default()));
    fill_form(
        &mut *form.lock().await,
        "Hasan",
        "hasan@gmail.com",
        "strongoonee",
    );
    let handler = Arc::new(SubmitSignUpHandler::new(form.clone(), gateway));
    (form, handler)
}

#[rstest]
#[tokio::test]
async fn it_should_display_success_message_and_reset_fields_on_successful_sign_up() {
    let state = AppState::default();
    let (form, handler) = mount(&state, Duration::from_secs(5)).await;
    assert!(form.lock().await.is_submit_enabled());

    let outcome = handler.handle().await;

    assert!(matches!(outcome, SubmitOutcome::Succeeded(Some(ref user)) if user.username == "Hasan"));
    let mut form = form.lock().await;
    let notification = form.notification(Instant::now()).expect("shown");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert!(notification.message.contains("sign up successfully"));
    for field in Field::ALL {
        assert_eq!(form.field(field), "");
    }
    assert_eq!(form.take_intents(), vec![SignUpIntent::navigate_home()]);

    let received = state.received().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].email, "hasan@gmail.com");
}

/// Endpoint that answers every sign-up with a fixed status and raw body.
async fn spawn_fixed_reply(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/signup",
        post(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[rstest]
#[case(StatusCode::CREATED, r#"{"message":"ok"}"#, false)]
#[case(StatusCode::CREATED, FULL_BODY, true)]
#[case(StatusCode::OK, FULL_BODY, true)]
#[case(StatusCode::OK, "{}", false)]
#[case(StatusCode::OK, "not-json", false)]
#[case(StatusCode::NO_CONTENT, "", false)]
#[tokio::test]
async fn it_should_treat_every_2xx_as_a_successful_sign_up(
    #[case] status: StatusCode,
    #[case] body: &'static str,
    #[case] echoes_user: bool,
) {
    let base_url = spawn_fixed_reply(status, body).await;
    let gateway = Arc::new(HttpSignUpGateway::new(Client::new(), base_url));
    let form = Arc::new(Mutex::new(SignUpForm::default()));
    fill_form(
        &mut *form.lock().await,
        "Hasan",
        "hasan@gmail.com",
        "strongoonee",
    );
    let handler = SubmitSignUpHandler::new(form.clone(), gateway);

    match handler.handle().await {
        SubmitOutcome::Succeeded(user) => assert_eq!(user.is_some(), echoes_user),
        other => panic!("unexpected outcome: {other:?}"),
    }

    let mut form = form.lock().await;
    let notification = form.notification(Instant::now()).expect("shown");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "sign up successfully!");
    for field in Field::ALL {
        assert_eq!(form.field(field), "");
    }
    assert_eq!(form.take_intents(), vec![SignUpIntent::navigate_home()]);
}

#[rstest]
#[case(500, "Internal Server Error")]
#[case(400, "Email already registered")]
#[tokio::test]
async fn it_should_display_error_message_on_sign_up_failure(
    #[case] status: u16,
    #[case] message: &str,
) {
    let state = AppState::default();
    state
        .set_behavior(SignUpBehavior::Failing {
            status,
            message: message.to_string(),
        })
        .await;
    let (form, handler) = mount(&state, Duration::from_secs(5)).await;

    assert_eq!(handler.handle().await, SubmitOutcome::Failed);

    let form = form.lock().await;
    let notification = form.notification(Instant::now()).expect("shown");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "error signing up!");
    assert_eq!(form.field(Field::Username), "Hasan");
    assert_eq!(form.field(Field::Email), "hasan@gmail.com");
    assert_eq!(form.field(Field::Password), "strongoonee");
}

#[rstest]
#[tokio::test]
async fn it_should_keep_submit_disabled_while_the_response_is_delayed() {
    let state = AppState::new(SignUpBehavior::Delayed {
        delay: Duration::from_millis(300),
    });
    let (form, handler) = mount(&state, Duration::from_secs(5)).await;

    let in_flight = {
        let handler = handler.clone();
        tokio::spawn(async move { handler.handle().await })
    };
    while state.received().await.is_empty() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    {
        let form = form.lock().await;
        assert!(form.is_submitting());
        assert!(!form.is_submit_enabled());
    }
    assert_eq!(handler.handle().await, SubmitOutcome::Ignored);

    let outcome = in_flight.await.expect("submission task panicked");
    assert!(matches!(outcome, SubmitOutcome::Succeeded(_)));
    assert_eq!(state.received().await.len(), 1);
    assert!(!form.lock().await.is_submitting());
}

#[rstest]
#[tokio::test]
async fn it_should_treat_a_timeout_like_a_failed_response() {
    let state = AppState::new(SignUpBehavior::Delayed {
        delay: Duration::from_millis(500),
    });
    let (form, handler) = mount(&state, Duration::from_millis(50)).await;

    assert_eq!(handler.handle().await, SubmitOutcome::Failed);

    let form = form.lock().await;
    let notification = form.notification(Instant::now()).expect("shown");
    assert_eq!(notification.message, "error signing up!");
    assert_eq!(form.field(Field::Username), "Hasan");
}

#[rstest]
#[tokio::test]
async fn two_successful_sign_ups_leave_the_same_empty_form() {
    let state = AppState::default();
    let (form, handler) = mount(&state, Duration::from_secs(5)).await;

    let mut snapshots: Vec<FormState> = Vec::new();
    for attempt in 0..2 {
        if attempt > 0 {
            fill_form(
                &mut *form.lock().await,
                "Hasan",
                "hasan@gmail.com",
                "strongoonee",
            );
        }
        assert!(matches!(handler.handle().await, SubmitOutcome::Succeeded(_)));
        snapshots.push(form.lock().await.state().clone());
    }

    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[0].username, "");
    assert_eq!(snapshots[0].email, "");
    assert_eq!(snapshots[0].password, "");
    assert_eq!(state.received().await.len(), 2);
}
