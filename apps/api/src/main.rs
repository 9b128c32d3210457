mod config;
mod contracts;
mod errors;
mod llm_client;
mod routes;
mod state;
mod static_files;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contracts::registry::ContractRegistry;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on a missing OpenAI key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting contract drafting API v{}", env!("CARGO_PKG_VERSION"));

    let registry = ContractRegistry::default();
    info!("Contract registry loaded ({} types)", registry.len());

    // Initialize LLM client
    let llm = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        config.openai_base_url
    );

    if !config.download_path.exists() {
        info!(
            "No download file at {} yet; /download will report it missing",
            config.download_path.display()
        );
    }

    let state = AppState {
        registry: Arc::new(registry),
        llm: Arc::new(llm),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
