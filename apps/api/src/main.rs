mod ats;
mod config;
mod errors;
mod matching;
mod models;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::ats::ProxyClient;
use crate::config::Config;
use crate::matching::scoring::KeywordScorer;
use crate::profile::MatcherProfile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job matcher v{}", env!("CARGO_PKG_VERSION"));

    let profile = MatcherProfile::load(config.profile_path.as_deref())?;
    match &config.profile_path {
        Some(path) => info!("Matcher profile loaded from {}", path.display()),
        None => info!("Using built-in matcher profile"),
    }

    let scorer = KeywordScorer::new(profile.scoring.clone());
    info!(
        "Tracking {} companies, {} keywords, {} locations, threshold {}",
        profile.targets.len(),
        scorer.tables().keywords.len(),
        scorer.tables().location_preferences.len(),
        profile.min_score
    );

    let job_source = ProxyClient::new(config.proxy_base_url.clone())?;
    info!("ATS proxy client initialized ({})", config.proxy_base_url);

    let state = AppState {
        profile: Arc::new(profile),
        job_source: Arc::new(job_source),
        scorer: Arc::new(scorer),
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
