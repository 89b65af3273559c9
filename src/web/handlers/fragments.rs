// HTMX fragment handlers
//
// Every fragment answers 200 with HTML, failures included, so HTMX swaps the
// failure sentence into the container. Upstream errors are logged here and
// never propagated.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_htmx::HxCurrentUrl;
use askama::Template;
use serde::Deserialize;

use crate::api_server::{AppError, AppState};
use crate::modal::{ModalState, ModalTicket};
use crate::navigation::mark_active_links;
use crate::view_builder::{build_landscape_view, build_modal_view, build_news_view};
use crate::view_models::*;

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "fragments/header.html")]
pub struct HeaderTemplate {
    pub site_title: String,
    pub nav_html: String,
}

#[derive(Template)]
#[template(path = "fragments/landscape.html")]
pub struct LandscapeFragment {
    pub view: LandscapeView,
}

#[derive(Template)]
#[template(path = "fragments/news.html")]
pub struct NewsFragment {
    pub view: NewsFeedView,
}

#[derive(Template)]
#[template(path = "fragments/failure.html")]
pub struct FailureFragment {
    pub message: &'static str,
}

#[derive(Template)]
#[template(path = "fragments/modal_shell.html")]
pub struct ModalShellFragment {
    pub view: ModalView,
}

#[derive(Template)]
#[template(path = "fragments/modal_content.html")]
pub struct ModalContentFragment {
    pub view: ModalView,
}

// ============================================================================
// Header
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct HeaderQuery {
    /// Overrides the path taken from `HX-Current-URL`
    pub path: Option<String>,
}

pub async fn header(
    State(state): State<AppState>,
    HxCurrentUrl(current_url): HxCurrentUrl,
    Query(query): Query<HeaderQuery>,
) -> Result<Response, AppError> {
    let path = state.config.header_fragment_path();
    let fragment = match tokio::fs::read_to_string(&path).await {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("ヘッダーの読み込みに失敗しました: {} ({})", e, path.display());
            return Ok(StatusCode::NO_CONTENT.into_response());
        }
    };

    let current_path = query
        .path
        .filter(|p| !p.is_empty())
        .or_else(|| current_url.map(|uri| uri.path().to_string()))
        .unwrap_or_else(|| "/".to_string());
    tracing::debug!("Marking active navigation links for {}", current_path);

    let template = HeaderTemplate {
        site_title: state.config.site_title.clone(),
        nav_html: mark_active_links(&fragment, &current_path),
    };
    Ok(Html(template.render()?).into_response())
}

// ============================================================================
// Landscape
// ============================================================================

pub async fn landscape(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = match state.api.fetch_landscape().await {
        Ok(landscape) => {
            tracing::debug!(
                "Rendering {} categories ({} tools)",
                landscape.categories.len(),
                landscape.tool_count()
            );
            LandscapeFragment {
                view: build_landscape_view(&landscape),
            }
            .render()?
        }
        Err(e) => {
            tracing::error!("Error fetching landscape data: {}", e);
            FailureFragment {
                message: LANDSCAPE_FETCH_FAILED,
            }
            .render()?
        }
    };
    Ok(Html(html))
}

// ============================================================================
// News
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    /// Initially selected filter label
    pub category: Option<String>,
}

pub async fn news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Html<String>, AppError> {
    let html = match state.api.fetch_news().await {
        Ok(payload) => {
            let view = build_news_view(&payload, query.category.as_deref());
            tracing::debug!(
                "Rendering {} news cards ({} visible under '{}')",
                view.cards.len(),
                view.visible_count(),
                view.selected
            );
            NewsFragment { view }.render()?
        }
        Err(e) => {
            tracing::error!("Error fetching news: {}", e);
            FailureFragment {
                message: NEWS_FETCH_FAILED,
            }
            .render()?
        }
    };
    Ok(Html(html))
}

// ============================================================================
// Corporate Info Modal
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    #[serde(default)]
    pub name: String,
    pub ticket: u64,
}

/// Trigger click: swap in the modal shell in its loading state
pub async fn corporate_info_open(
    State(state): State<AppState>,
    Query(query): Query<OpenQuery>,
) -> Result<Html<String>, AppError> {
    let ticket = state.tickets.issue();
    let modal = ModalState::Closed.open(ticket, query.name);
    tracing::debug!("Opening corporate info modal (ticket {})", ticket.0);

    Ok(Html(render_modal_shell(&modal)?))
}

/// Loading shell's follow-up request: fetch and resolve
pub async fn corporate_info_content(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> Result<Html<String>, AppError> {
    let ticket = ModalTicket(query.ticket);
    let result = state
        .api
        .fetch_corporate_info(&query.name)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching corporate info for '{}': {}", query.name, e);
            e.user_message()
                .unwrap_or(CORPORATE_INFO_FETCH_FAILED)
                .to_string()
        });

    let modal = ModalState::Closed.open(ticket, query.name.clone()).resolve(ticket, result);
    match build_modal_view(&modal) {
        Some(view) => Ok(Html(ModalContentFragment { view }.render()?)),
        None => Ok(Html(String::new())),
    }
}

/// Close button or backdrop click
pub async fn corporate_info_close() -> Html<String> {
    Html(String::new())
}

fn render_modal_shell(modal: &ModalState) -> Result<String, AppError> {
    match build_modal_view(modal) {
        Some(view) => Ok(ModalShellFragment { view }.render()?),
        None => Ok(String::new()),
    }
}
