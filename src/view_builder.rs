//! View Builder - Converts API payloads to view models
//!
//! Transforms the upstream wire types into structured view model types for
//! Askama template rendering. Display defaults (unknown source, general
//! category, missing analysis) are applied here and nowhere else.

use crate::filter::{self, FilterStylesheet};
use crate::modal::ModalState;
use crate::models::{non_empty, NewsItem, NewsPayload, ToolLandscape};
use crate::view_models::*;

/// Scope selector the filter stylesheet hangs off
pub const NEWS_PAGE_SCOPE: &str = "#news-page";

pub fn corporate_info_open_url(company: &str) -> String {
    format!(
        "/fragments/corporate_info/open?name={}",
        urlencoding::encode(company)
    )
}

pub fn corporate_info_content_url(company: &str, ticket: u64) -> String {
    format!(
        "/fragments/corporate_info/content?name={}&ticket={}",
        urlencoding::encode(company),
        ticket
    )
}

// ============================================================================
// Landscape Builder
// ============================================================================

pub fn build_landscape_view(landscape: &ToolLandscape) -> LandscapeView {
    let sections = landscape
        .categories
        .iter()
        .map(|category| CategorySection {
            title: category.name.clone(),
            tools: category
                .tools
                .iter()
                .map(|tool| {
                    let company = non_empty(tool.company.as_deref()).map(str::to_string);
                    ToolCard {
                        name: tool.name.clone(),
                        link: tool.link.clone(),
                        summary: tool.summary.clone(),
                        use_case: tool.use_case.clone(),
                        corporate_info_url: company.as_deref().map(corporate_info_open_url),
                        company,
                    }
                })
                .collect(),
        })
        .collect();

    LandscapeView { sections }
}

// ============================================================================
// News Builder
// ============================================================================

/// Build cards, filter controls and stylesheet for a news payload
///
/// `requested` preselects a category; unknown labels fall back to `すべて`.
pub fn build_news_view(payload: &NewsPayload, requested: Option<&str>) -> NewsFeedView {
    let Some(items) = payload.news.as_deref() else {
        return NewsFeedView {
            selected: filter::ALL_CATEGORY.to_string(),
            ..Default::default()
        };
    };

    let categories = filter::derive_categories(items);
    let selected = filter::resolve_selection(&categories, requested).to_string();
    let visibility = filter::apply(&selected, items.iter().map(NewsItem::stored_category));

    let cards = items
        .iter()
        .zip(visibility)
        .map(|(item, visible)| build_news_card(item, &categories, visible))
        .collect();

    let controls = categories
        .iter()
        .enumerate()
        .map(|(index, label)| FilterControl {
            index,
            group: filter::FILTER_GROUP,
            control_id: filter::control_id(index),
            label: label.clone(),
            checked: *label == selected,
        })
        .collect();

    NewsFeedView {
        cards,
        controls: Some(controls),
        stylesheet: FilterStylesheet::new(NEWS_PAGE_SCOPE, &categories).render(),
        selected,
    }
}

fn build_news_card(item: &NewsItem, categories: &[String], visible: bool) -> NewsCard {
    let stored_category = item.stored_category().map(str::to_string);
    let category_index = stored_category
        .as_deref()
        .and_then(|c| categories.iter().position(|label| label == c));

    NewsCard {
        title: item.title.clone(),
        link: item.link.clone(),
        source_label: non_empty(item.source.as_deref()).unwrap_or(UNKNOWN_SOURCE).to_string(),
        category_label: stored_category.clone().unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        summary: non_empty(item.summary.as_deref()).unwrap_or(NO_SUMMARY).to_string(),
        stored_category,
        category_index,
        visible,
    }
}

// ============================================================================
// Corporate Info Builder
// ============================================================================

pub fn build_modal_view(state: &ModalState) -> Option<ModalView> {
    let ticket = state.ticket()?;
    let company = state.company().unwrap_or_default().to_string();

    let (content_url, body) = match state {
        ModalState::Closed => return None,
        ModalState::Loading { .. } => (
            Some(corporate_info_content_url(&company, ticket.0)),
            ModalBody::Loading,
        ),
        ModalState::Loaded { info, .. } => (
            None,
            ModalBody::Loaded {
                rows: vec![
                    InfoRow { label: "法人名", value: info.name.clone() },
                    InfoRow { label: "法人番号", value: info.corporate_number.clone() },
                    InfoRow { label: "所在地", value: info.display_address() },
                    InfoRow { label: "更新日", value: info.update_date.clone() },
                ],
            },
        ),
        ModalState::Failed { message, .. } => (
            None,
            ModalBody::Failed {
                message: message.clone(),
            },
        ),
    };

    Some(ModalView {
        company,
        content_id: ticket.content_id(),
        content_url,
        body,
    })
}
