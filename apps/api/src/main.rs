mod config;
mod errors;
mod evaluation;
mod extraction;
mod fairness;
mod llm_client;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::evaluation::{DocumentEvaluator, HeuristicEvaluator, RemoteEvaluator};
use crate::extraction::ScoringProfile;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::InMemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fairdoc API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the evaluation backend: remote when an API key is configured,
    // heuristic otherwise. The service runs either way.
    let evaluator: Arc<dyn DocumentEvaluator> = match &config.openrouter_api_key {
        Some(key) => {
            info!("Remote evaluator initialized (model: {})", llm_client::MODEL);
            Arc::new(RemoteEvaluator::new(LlmClient::new(key.clone())))
        }
        None => {
            warn!("OPENROUTER_API_KEY not set; using heuristic evaluator");
            Arc::new(HeuristicEvaluator)
        }
    };

    let profile = ScoringProfile::named(config.scoring_profile);
    info!("Scoring profile: {:?}", profile.name);

    let store = Arc::new(InMemoryStore::new());

    let state = AppState {
        evaluator,
        store,
        profile,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
