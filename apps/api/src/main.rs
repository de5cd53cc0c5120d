mod config;
mod errors;
mod reference;
mod routes;
mod state;
mod verses;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::reference::aliases::AliasTables;
use crate::reference::parser::ReferenceParser;
use crate::routes::build_router;
use crate::state::AppState;
use crate::verses::quran_api::QuranApiClient;
use crate::verses::service::VerseService;

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

    info!("Starting QVerse API v{}", env!("CARGO_PKG_VERSION"));

    // Alias tables are built once and shared read-only
    let tables = Arc::new(AliasTables::builtin());
    let parser = ReferenceParser::new(tables);

    let fetcher = Arc::new(QuranApiClient::from_config(&config)?);
    info!(
        "Quran API client initialized ({}, translations {:?})",
        config.quran_api_base_url, config.translation_ids
    );

    let state = AppState {
        verses: VerseService::new(parser, fetcher),
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
