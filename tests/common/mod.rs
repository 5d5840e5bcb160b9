#![allow(dead_code)]

use axum::Router;
use user_contract::{
    app,
    state::{ConsumerState, ProviderState},
};

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    base_url
}

/// Real provider with a freshly seeded store.
pub async fn spawn_provider() -> (String, ProviderState) {
    let state = ProviderState::seeded();
    let base_url = spawn_router(app::build_provider_app(state.clone())).await;
    (base_url, state)
}

pub async fn spawn_consumer(state: ConsumerState) -> String {
    spawn_router(app::build_consumer_app(state)).await
}

/// URL on which nothing is listening.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let port = listener.local_addr().expect("free port addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
