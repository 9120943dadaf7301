//! Environment Dashboard HTTP Server Binary
//!
//! Main entry point for the REST API server. It loads configuration,
//! constructs the upstream provider clients and the aggregator, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! OPENWEATHER_API_KEY=... WAQI_API_TOKEN=... cargo run --bin envmon-server
//! ```
//!
//! # Environment Variables
//!
//! - `OPENWEATHER_API_KEY`: OpenWeather API key (required)
//! - `WAQI_API_TOKEN`: WAQI API token (required)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use envmon_rust::clients::{OpenWeatherClient, WaqiClient};
use envmon_rust::config::AppConfig;
use envmon_rust::http::{create_router, AppState};
use envmon_rust::services::Aggregator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting environment dashboard server");

    // API keys live in .env during development
    let _ = dotenv::dotenv();
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // One shared connection pool for both upstream clients
    let http_client = reqwest::Client::new();
    let aggregator = Arc::new(Aggregator::new(
        Arc::new(OpenWeatherClient::new(
            http_client.clone(),
            config.openweather_api_key.clone(),
        )),
        Arc::new(WaqiClient::new(http_client, config.waqi_api_token.clone())),
    ));

    let state = AppState::new(aggregator);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
