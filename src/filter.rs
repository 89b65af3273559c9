//! News category filter
//!
//! Categories are derived from the fetched items: `すべて` first, then each
//! distinct non-empty category in first-occurrence order. An upstream
//! category spelled `すべて` folds into the synthetic label. Selection is
//! exclusive and lives in the browser (a radio group); the server only
//! decides the initial selection and ships the stylesheet that encodes
//! [`is_visible`] for every label.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::models::NewsItem;

/// Synthetic "all" label, always first and initially selected
pub const ALL_CATEGORY: &str = "すべて";

/// Radio group name shared by every filter control
pub const FILTER_GROUP: &str = "news-category";

/// Ordered filter labels for a news feed
pub fn derive_categories(items: &[NewsItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for category in items.iter().filter_map(NewsItem::stored_category) {
        if category != ALL_CATEGORY && seen.insert(category) {
            categories.push(category.to_string());
        }
    }
    categories
}

/// Card visibility under `selected`: exact, case-sensitive match
pub fn is_visible(selected: &str, stored_category: Option<&str>) -> bool {
    selected == ALL_CATEGORY || stored_category == Some(selected)
}

/// Visibility of every card, in card order
pub fn apply<'a, I>(selected: &str, stored_categories: I) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    stored_categories
        .into_iter()
        .map(|stored| is_visible(selected, stored))
        .collect()
}

/// Resolve a requested label against the available ones
///
/// Unknown or missing labels fall back to `すべて`.
pub fn resolve_selection<'a>(categories: &'a [String], requested: Option<&str>) -> &'a str {
    requested
        .and_then(|wanted| categories.iter().find(|c| c.as_str() == wanted))
        .map(String::as_str)
        .unwrap_or(ALL_CATEGORY)
}

/// DOM id of the radio control for the label at `index`
pub fn control_id(index: usize) -> String {
    format!("news-filter-{}", index)
}

// ============================================================================
// Browser-side filter rules
// ============================================================================

/// CSS that hides non-matching cards while a category control is checked
///
/// Cards carry `data-category-index`, the position of their stored category
/// in the derived label list. `すべて` (index 0) needs no rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterStylesheet {
    pub scope: String,
    pub category_count: usize,
}

impl FilterStylesheet {
    pub fn new(scope: impl Into<String>, categories: &[String]) -> Self {
        Self {
            scope: scope.into(),
            category_count: categories.len(),
        }
    }

    pub fn render(&self) -> String {
        let mut css = String::with_capacity(self.category_count * 128);
        for index in 1..self.category_count {
            let _ = writeln!(
                css,
                "{scope}:has(#{id}:checked) .news-card:not([data-category-index=\"{index}\"]) {{ display: none; }}",
                scope = self.scope,
                id = control_id(index),
                index = index,
            );
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Option<&str>) -> NewsItem {
        NewsItem {
            title: "t".to_string(),
            link: "https://example.com".to_string(),
            source: None,
            category: category.map(str::to_string),
            summary: None,
        }
    }

    #[test]
    fn test_derive_categories_first_occurrence_order() {
        let items = vec![
            item(Some("AI倫理")),
            item(None),
            item(Some("大規模言語モデル")),
            item(Some("")),
            item(Some("AI倫理")),
            item(Some("スタートアップ動向")),
        ];
        assert_eq!(
            derive_categories(&items),
            vec!["すべて", "AI倫理", "大規模言語モデル", "スタートアップ動向"]
        );
    }

    #[test]
    fn test_category_named_all_is_not_duplicated() {
        let items = vec![item(Some("A")), item(Some(ALL_CATEGORY)), item(Some("B"))];
        let categories = derive_categories(&items);
        assert_eq!(categories, vec!["すべて", "A", "B"]);

        // No rule may hide everything while すべて is checked
        let css = FilterStylesheet::new("#news-page", &categories).render();
        assert_eq!(css.lines().count(), 2);
        assert!(!css.contains("news-filter-0"));
        assert!(!css.contains("news-filter-3"));
    }

    #[test]
    fn test_derive_categories_empty_feed() {
        assert_eq!(derive_categories(&[]), vec![ALL_CATEGORY]);
    }

    #[test]
    fn test_all_shows_everything() {
        let stored = [Some("Policy"), None, Some("Research")];
        assert_eq!(apply(ALL_CATEGORY, stored), vec![true, true, true]);
    }

    #[test]
    fn test_exact_case_sensitive_match() {
        let stored = [Some("Policy"), Some("policy"), None, Some("Policy ")];
        assert_eq!(apply("Policy", stored), vec![true, false, false, false]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let stored = [Some("A"), Some("B"), Some("A")];
        let first = apply("A", stored);
        let second = apply("A", stored);
        assert_eq!(first, second);
        assert_eq!(first, vec![true, false, true]);
    }

    #[test]
    fn test_resolve_selection() {
        let categories = vec![ALL_CATEGORY.to_string(), "Policy".to_string()];
        assert_eq!(resolve_selection(&categories, Some("Policy")), "Policy");
        assert_eq!(resolve_selection(&categories, Some("Unknown")), ALL_CATEGORY);
        assert_eq!(resolve_selection(&categories, None), ALL_CATEGORY);
    }

    #[test]
    fn test_stylesheet_one_rule_per_category() {
        let categories = vec![ALL_CATEGORY.to_string(), "A".to_string(), "B".to_string()];
        let css = FilterStylesheet::new("#news-page", &categories).render();
        assert_eq!(css.lines().count(), 2);
        assert!(css.contains(
            "#news-page:has(#news-filter-1:checked) .news-card:not([data-category-index=\"1\"]) { display: none; }"
        ));
        assert!(!css.contains("news-filter-0"));
    }
}
