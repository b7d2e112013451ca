mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;
mod text;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::matching::build_screener;
use crate::routes::build_router;
use crate::state::AppState;
use crate::text::RuleBasedAnalyzer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
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

    info!("Starting screening API v{}", env!("CARGO_PKG_VERSION"));

    // Process-wide, read-only after this point
    let lexicon = Arc::new(config.load_lexicon()?);
    info!(
        "Skill lexicon loaded ({} terms, {} cue words)",
        lexicon.dictionary().len(),
        lexicon.cue_words().len()
    );

    // RuleBasedAnalyzer by default; any TextAnalyzer backend can be swapped in here
    let screener = Arc::new(build_screener(Arc::new(RuleBasedAnalyzer::new()), lexicon));

    let state = AppState {
        config: config.clone(),
        screener,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the upload UI has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
