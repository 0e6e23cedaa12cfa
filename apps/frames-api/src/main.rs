mod config;
mod errors;
mod frames;
mod models;
mod provider;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::provider::CloudinaryClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Frames API v{}", env!("CARGO_PKG_VERSION"));

    // Credentials are checked lazily by the first render call.
    if config.cloudinary.cloud_name.is_none()
        || config.cloudinary.api_key.is_none()
        || config.cloudinary.api_secret.is_none()
    {
        warn!("Cloudinary credentials are incomplete; render requests will fail");
    }

    let provider = CloudinaryClient::new(config.cloudinary.clone())?;
    info!(
        "Render provider initialized (api base: {}, mode: {:?})",
        config.cloudinary.api_base, config.render_mode
    );

    let state = AppState {
        config: config.clone(),
        provider: Arc::new(provider),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
