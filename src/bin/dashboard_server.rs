// Dashboard server binary entry point
//
// Purpose: serve the landscape and news pages backed by the upstream API
// Usage: cargo run --bin dashboard_server

use ai_pm_dashboard::{create_router, AppState, DashboardConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "ai_pm_dashboard=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting dashboard server...");

    // Configuration from environment variables
    let config = DashboardConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  DASHBOARD_API_URL: {}", config.api_base_url);
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  SITE_TITLE: {}", config.site_title);

    let port = config.port;
    let state = AppState::new(config).await?;

    // Create router with all pages, fragments and middleware
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
