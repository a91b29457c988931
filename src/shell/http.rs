use axum::{Router, routing::post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::modules::sign_up::adapters::outbound::http_gateway::SIGN_UP_PATH;
use crate::modules::sign_up::use_cases::submit_sign_up::inbound::http as sign_up_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(SIGN_UP_PATH, post(sign_up_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}
