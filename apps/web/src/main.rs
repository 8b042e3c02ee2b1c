mod backend_client;
mod cache;
mod config;
mod dropdowns;
mod errors;
mod listing;
mod models;
mod registration;
mod routes;
mod seo;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend_client::BackendClient;
use crate::cache::{DropdownCache, MemoryCache, RedisCache};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
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

    info!("Starting referral-web v{}", env!("CARGO_PKG_VERSION"));

    let backend = BackendClient::new(
        &config.backend_api_url,
        Duration::from_secs(config.backend_timeout_secs),
    )?;
    info!("Backend client initialized ({})", config.backend_api_url);

    let cache = build_cache(&config).await?;
    info!(
        "Dropdown cache: {} (ttl {}h)",
        cache.backend_name(),
        config.dropdown_cache_ttl_hours
    );

    let state = AppState {
        backend,
        cache,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the storefront origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis when `REDIS_URL` is set, otherwise a per-process memory cache.
async fn build_cache(config: &Config) -> Result<Arc<dyn DropdownCache>> {
    match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            let cache = RedisCache::connect(&client)
                .await
                .context("Failed to connect to Redis")?;
            Ok(Arc::new(cache))
        }
        None => Ok(Arc::new(MemoryCache::new())),
    }
}
