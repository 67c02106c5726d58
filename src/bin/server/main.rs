use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use swift_storage_adapter::{
    adapters::inbound::http::router::{create_router, AppState},
    app::AppBuilder,
    config::{init_logging, SwiftArgs},
};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "swift-storage-adapter")]
#[command(about = "Serves signed temporary URLs for an OpenStack Swift container", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(flatten)]
    swift: SwiftArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_level);

    info!("Starting Swift storage adapter");
    info!("Swift backend: {}", cli.swift.swift_backend);
    info!("State backend: {}", cli.swift.state_backend);

    let config = cli.swift.to_app_config()?;
    let app_services = AppBuilder::from_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    for error in app_services.plugin.ensure(false).await {
        tracing::warn!(%error, "Container check failed at startup");
    }

    let state = AppState {
        signed_url_service: app_services.signed_url_service,
        health_service: app_services.health_service,
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}
