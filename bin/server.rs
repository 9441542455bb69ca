// Stripe Analytics - Web Server
// Stateless JSON API for the dashboard front end

use std::net::SocketAddr;

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use stripe_analytics::api;

/// Bind address; the service carries no configuration surface
const LISTEN_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = LISTEN_ADDR.parse()?;
    let app = api::router();

    tracing::info!(%addr, "analytics server starting");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
