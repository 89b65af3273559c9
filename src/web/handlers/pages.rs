// Page handlers for HTML rendering with Askama
//
// Pages are shells: each container element loads its own fragment through
// HTMX when it appears, so the container present on a page decides what runs.

use axum::extract::{Query, State};
use axum::response::Html;
use askama::Template;

use crate::api_server::{AppError, AppState};
use crate::web::handlers::fragments::NewsQuery;

// ============================================================================
// Landscape Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/landscape.html")]
pub struct LandscapeTemplate {
    pub title: String,
}

pub async fn landscape_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = LandscapeTemplate {
        title: state.config.site_title.clone(),
    };
    Ok(Html(template.render()?))
}

// ============================================================================
// News Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/news.html")]
pub struct NewsTemplate {
    pub title: String,
    /// Fragment URL for `#news-container`, carrying any `?category=` deep link
    pub news_url: String,
}

pub async fn news_page(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Html<String>, AppError> {
    let news_url = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => format!("/fragments/news?category={}", urlencoding::encode(category)),
        None => "/fragments/news".to_string(),
    };
    let template = NewsTemplate {
        title: state.config.site_title.clone(),
        news_url,
    };
    Ok(Html(template.render()?))
}
