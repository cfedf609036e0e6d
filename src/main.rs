use std::sync::Arc;

use gamescout::api::{create_router, AppState};
use gamescout::config::Config;
use gamescout::db::{create_redis_client, Cache};
use gamescout::graph::build_graph;
use gamescout::services::catalog::load_catalog;
use gamescout::services::providers::steam::SteamProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    // The catalog and graph are required reference data; failing to load
    // them is fatal
    let catalog = Arc::new(load_catalog(&config.catalog_path)?);
    let graph = Arc::new(build_graph(&catalog, &config.graph_namespace));

    let redis_client = create_redis_client(&config.redis_url)?;
    let (cache, _cache_writer) = Cache::new(redis_client).await;

    let provider = Arc::new(SteamProvider::new(
        cache,
        config.steam_api_key.clone(),
        config.steam_api_url.clone(),
    ));

    let state = AppState::new(graph, catalog, provider);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
