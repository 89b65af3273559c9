//! View Models for page fragments
//!
//! Structured data handed to the Askama templates. Built from the wire types
//! by `view_builder`; templates only iterate and print.

use serde::Serialize;

// ============================================================================
// Fixed page text
// ============================================================================

pub const UNKNOWN_SOURCE: &str = "不明";
pub const DEFAULT_CATEGORY: &str = "一般";
pub const NO_SUMMARY: &str = "分析結果はありません。";
pub const NO_NEWS: &str = "表示するニュースがありません。";
pub const LANDSCAPE_FETCH_FAILED: &str = "ツールマップの取得に失敗しました。";
pub const NEWS_FETCH_FAILED: &str = "ニュースの取得に失敗しました。";
pub const CORPORATE_INFO_FETCH_FAILED: &str = "法人情報の取得に失敗しました。";
pub const LOADING: &str = "読み込み中...";

// ============================================================================
// Landscape
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolCard {
    pub name: String,
    pub link: String,
    pub summary: String,
    pub use_case: String,
    pub company: Option<String>,
    /// `hx-get` target that opens the corporate info modal
    pub corporate_info_url: Option<String>,
}

impl ToolCard {
    pub fn has_corporate_info(&self) -> bool {
        self.corporate_info_url.is_some()
    }

    pub fn corporate_info_url_attr(&self) -> &str {
        self.corporate_info_url.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySection {
    pub title: String,
    pub tools: Vec<ToolCard>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LandscapeView {
    pub sections: Vec<CategorySection>,
}

// ============================================================================
// News
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsCard {
    pub title: String,
    pub link: String,
    pub source_label: String,
    pub category_label: String,
    pub summary: String,
    /// Raw category the filter compares against
    pub stored_category: Option<String>,
    /// Position of `stored_category` in the filter labels
    pub category_index: Option<usize>,
    /// Visible under the initial selection; the browser derives this from the
    /// checked radio, so it is never rendered as an inline style
    pub visible: bool,
}

impl NewsCard {
    pub fn category_attr(&self) -> &str {
        self.stored_category.as_deref().unwrap_or("")
    }

    pub fn category_index_attr(&self) -> String {
        self.category_index.map(|i| i.to_string()).unwrap_or_default()
    }
}

/// One radio control + label pair in `#filter-buttons`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterControl {
    pub index: usize,
    /// Radio group shared by all controls of one feed
    pub group: &'static str,
    pub control_id: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct NewsFeedView {
    pub cards: Vec<NewsCard>,
    /// `None` when the payload carried no news array
    pub controls: Option<Vec<FilterControl>>,
    pub selected: String,
    pub stylesheet: String,
}

impl NewsFeedView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.visible).count()
    }

    pub fn has_controls(&self) -> bool {
        self.controls.is_some()
    }

    pub fn control_list(&self) -> &[FilterControl] {
        self.controls.as_deref().unwrap_or(&[])
    }
}

// ============================================================================
// Corporate Info Modal
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum ModalBody {
    Loading,
    Loaded { rows: Vec<InfoRow> },
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModalView {
    pub company: String,
    pub content_id: String,
    /// `hx-get` target that resolves a loading modal
    pub content_url: Option<String>,
    pub body: ModalBody,
}

impl ModalView {
    pub fn is_loading(&self) -> bool {
        matches!(self.body, ModalBody::Loading)
    }

    pub fn rows(&self) -> &[InfoRow] {
        match &self.body {
            ModalBody::Loaded { rows } => rows,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.body, ModalBody::Failed { .. })
    }

    pub fn failure_text(&self) -> &str {
        match &self.body {
            ModalBody::Failed { message } => message,
            _ => "",
        }
    }

    pub fn content_url_attr(&self) -> &str {
        self.content_url.as_deref().unwrap_or("")
    }
}
