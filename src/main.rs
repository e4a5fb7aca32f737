use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::database::{seed, ActivityCatalog};
use activities::{build_router, AppState, BUILD_ID};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // 2. Catalog: seed file when configured, built-in table otherwise
    let listing = match &config.seed_path {
        Some(path) => match seed::load_seed_file(path) {
            Ok(listing) => listing,
            Err(e) => {
                error!("Seed load failed: {}", e);
                std::process::exit(1);
            }
        },
        None => seed::default_activities(),
    };
    let catalog = ActivityCatalog::new(listing);
    info!(
        activities = catalog.len().await,
        build_id = BUILD_ID,
        static_dir = %config.static_dir.display(),
        "catalog ready"
    );

    let app = build_router(AppState::new(catalog, config.static_dir.clone()));

    // 3. Bind, with one fallback port
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                "Could not bind {}: {}. Trying {}",
                config.bind_addr(),
                e,
                config.fallback_bind_addr()
            );
            match tokio::net::TcpListener::bind(config.fallback_bind_addr()).await {
                Ok(l) => l,
                Err(e) => {
                    error!("Could not bind fallback {}: {}", config.fallback_bind_addr(), e);
                    std::process::exit(1);
                }
            }
        }
    };

    let bound_addr: Option<SocketAddr> = listener.local_addr().ok();
    if let Some(addr) = bound_addr {
        info!("Server running on http://{}", addr);
        info!("Open http://{}/static/index.html to sign up", addr);
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Ctrl-C handler failed: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
