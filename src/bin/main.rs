use std::sync::Arc;

use anyhow::Context;
use carbon_render::core::CarbonClient;
use carbon_render::core::chrome::HeadlessChrome;
use carbon_render::settings::get_config;
use carbon_render::{AppState, init_openapi_route};
use poem::listener::TcpListener;
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config().context("invalid configuration")?;

    let log_level: Level = config.log_level.parse().unwrap_or(Level::INFO);
    // Logging to File
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .init();

    tracing::info!("Initializing Carbon Render Service...");
    tracing::info!("run with config: {:?}", config);

    let automation =
        HeadlessChrome::new(config.chrome()).context("Failed to initialize browser automation")?;

    // Init App State
    let app_state = Arc::new(AppState {
        renderer: Arc::new(CarbonClient::new(automation)),
    });

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;

    Ok(())
}
