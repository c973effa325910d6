mod config;
mod errors;
mod export;
mod generation;
mod llm_client;
mod routes;
mod state;
#[cfg(test)]
mod test_helpers;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::error::GenerationError;
use crate::generation::generator::{GenerationService, GeneratorConfig};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Test Case API v{}", env!("CARGO_PKG_VERSION"));

    let generator = match GeneratorConfig::from_config(&config).and_then(GenerationService::new) {
        Ok(generator) => {
            info!("Inference client initialized (endpoint: {})", config.model_url);
            Some(generator)
        }
        Err(GenerationError::MissingCredential) => {
            warn!("HF_TOKEN is not set; generation requests will be rejected");
            None
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to initialize inference client: {e}")),
    };

    let state = AppState { generator };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
