use tracing_subscriber::{EnvFilter, fmt};

use sign_up::modules::sign_up::use_cases::submit_sign_up::inbound::http::SignUpBehavior;
use sign_up::shared::config::Settings;
use sign_up::shell::http::serve;
use sign_up::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let behavior = match settings.mock_delay {
        Some(delay) => SignUpBehavior::Delayed { delay },
        None => SignUpBehavior::Created,
    };

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(
        "mock sign-up endpoint: http://{}/signup",
        listener.local_addr()?
    );
    serve(listener, AppState::new(behavior)).await?;
    Ok(())
}
