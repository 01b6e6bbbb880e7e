mod chat;
mod config;
mod documents;
mod errors;
mod llm_client;
mod persona;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::documents::Documents;
use crate::llm_client::{ChatCompleter, LlmClient};
use crate::persona::{OwnerIdentity, Persona};
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

    info!("Starting Persona API v{}", env!("CARGO_PKG_VERSION"));

    // Grounding documents and system prompt, built once
    let docs = Documents::load(&config.resume_path, &config.summary_path);
    let persona = Arc::new(Persona::new(OwnerIdentity::from_config(&config), &docs));
    info!(
        "Persona ready for {} ({} chars of system prompt)",
        persona.owner().name,
        persona.system_prompt().len()
    );

    let llm: Option<Arc<dyn ChatCompleter>> = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), &config.openai_base_url)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; /api/chat will return errors");
            None
        }
    };

    let state = AppState { persona, llm };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
