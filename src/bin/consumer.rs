use user_contract::{app, config::ConsumerConfig, state::ConsumerState, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::LogSettings::from_env("consumer").init();

    let config = ConsumerConfig::from_env()?;
    let state = ConsumerState::init(&config)?;
    tracing::info!(
        provider_url = %config.provider_url,
        timeout_ms = config.provider_timeout.as_millis() as u64,
        "consumer configured"
    );

    app::serve(app::build_consumer_app(state), config.addr()?).await
}
