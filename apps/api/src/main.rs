mod config;
mod errors;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod optimizer;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, OptimizerMode};
use crate::jobs::provider::AdzunaClient;
use crate::jobs::search::JobSearch;
use crate::llm_client::LlmClient;
use crate::matching::scoring::{FixedJitter, Jitter, RandomJitter};
use crate::optimizer::{HeuristicOptimizer, LlmOptimizer, ResumeOptimizer};
use crate::resume::extract::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GradHire API v{}", env!("CARGO_PKG_VERSION"));

    // Job provider (Adzuna). Missing credentials only disable matching.
    let provider = AdzunaClient::from_config(&config)?;
    if !config.has_job_search_credentials() {
        warn!("ADZUNA_APP_ID / ADZUNA_API_KEY not set; job search will return no results");
    }

    let jitter: Arc<dyn Jitter> = if config.score_jitter {
        Arc::new(RandomJitter)
    } else {
        Arc::new(FixedJitter(0))
    };
    let jobs = JobSearch::new(Arc::new(provider), jitter);

    let optimizer = build_optimizer(&config)?;

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(PdfTextExtractor),
        jobs,
        optimizer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_optimizer(config: &Config) -> Result<Arc<dyn ResumeOptimizer>> {
    if config.optimizer_mode == OptimizerMode::Llm {
        if let Some(llm) = LlmClient::from_config(config)? {
            info!("Resume optimizer: llm (model: {})", llm_client::MODEL);
            return Ok(Arc::new(LlmOptimizer::new(llm)));
        }
    }

    info!("Resume optimizer: static");
    Ok(Arc::new(HeuristicOptimizer))
}
