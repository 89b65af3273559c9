// Axum front server module
//
// Purpose: serve the landscape and news pages plus the HTMX fragments that
// fill their containers from the upstream dashboard API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::client::DashboardApiClient;
use crate::config::DashboardConfig;
use crate::modal::TicketCounter;
use crate::web::handlers::{fragments, pages};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub api: DashboardApiClient,
    /// Source of corporate info modal tickets
    pub tickets: Arc<TicketCounter>,
}

impl AppState {
    pub async fn new(config: DashboardConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing upstream API client for {}", config.api_base_url);
        let http = reqwest::Client::builder().build()?;
        let api = DashboardApiClient::with_client(http, config.api_base_url.clone());

        let header_path = config.header_fragment_path();
        if tokio::fs::metadata(&header_path).await.is_err() {
            tracing::warn!(
                "Navigation fragment {} not found; header will stay empty",
                header_path.display()
            );
        }

        Ok(Self {
            config: Arc::new(config),
            api,
            tickets: Arc::new(TicketCounter::new()),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Pages
        .route("/", get(pages::landscape_page))
        .route("/index.html", get(pages::landscape_page))
        .route("/news.html", get(pages::news_page))

        // HTMX fragments, one per page container
        .route("/fragments/header", get(fragments::header))
        .route("/fragments/landscape", get(fragments::landscape))
        .route("/fragments/news", get(fragments::news))
        .route("/fragments/corporate_info/open", get(fragments::corporate_info_open))
        .route("/fragments/corporate_info/content", get(fragments::corporate_info_content))
        .route("/fragments/corporate_info/close", get(fragments::corporate_info_close))

        // header.html, style.css
        .nest_service("/static", static_files)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Template(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Template(err) => {
                tracing::error!("Template error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Template error: {}", err))
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
