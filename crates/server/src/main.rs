//! Long-running web shell for the rewrite pipeline.
//!
//! Reads the model credential from the environment once at startup, then
//! serves the form UI until stopped. `RECAST_ADDR` overrides the default
//! bind address.

use std::sync::Arc;
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use recast_core::{Recaster, Rewriter, RewriterConfig};

mod app;
mod views;

use app::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RewriterConfig::from_env()?;
    info!(model = %config.model, "model client configured");

    let recaster = Recaster::new(Rewriter::new(config)?);
    let state = Arc::new(AppState { recaster });

    let router = app::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(300)));

    let addr = std::env::var("RECAST_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, router).await?;

    Ok(())
}
