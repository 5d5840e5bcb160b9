use user_contract::{app, config::ProviderConfig, state::ProviderState, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::LogSettings::from_env("provider").init();

    let config = ProviderConfig::from_env()?;
    let state = ProviderState::seeded();
    tracing::info!(users = state.store.len(), "provider store seeded");

    app::serve(app::build_provider_app(state), config.addr()?).await
}
