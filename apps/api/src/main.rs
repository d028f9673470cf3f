mod auth;
mod config;
mod db;
mod errors;
mod models;
mod pages;
mod resumes;
mod routes;
mod share;
mod state;
mod storage;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::SessionIssuer;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::s3::S3Storage;
use crate::store::postgres::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resumelink v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let pool = create_pool(&config.database_url).await?;

    // Initialize S3-compatible storage
    let storage = S3Storage::from_config(&config).await;
    info!(
        "S3 storage initialized (bucket: {}, endpoint: {})",
        config.s3_bucket, config.s3_endpoint
    );

    let sessions = SessionIssuer::new(&config.jwt_secret, config.session_ttl_hours);
    info!("Session tokens expire after {}h", config.session_ttl_hours);

    // Build app state
    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        storage: Arc::new(storage),
        sessions,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the deployed origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
