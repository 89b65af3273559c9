//! Wire types for the upstream dashboard API
//!
//! Three payloads are consumed:
//! - `GET /` → category name → ordered list of [`Tool`]
//! - `GET /api/news` → [`NewsPayload`]
//! - `GET /api/corporate_info?name=` → [`CorporateInfo`] or [`ApiErrorBody`]

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Tool Landscape
// ============================================================================

/// One tool card on the landscape page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub link: String,
    pub summary: String,
    pub use_case: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Tools grouped under one category heading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCategory {
    pub name: String,
    pub tools: Vec<Tool>,
}

/// Category → tools mapping, kept in payload order
///
/// The upstream sends a JSON object; categories are rendered in the order
/// the keys appear on the wire, so this deserializes into a Vec rather than a map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolLandscape {
    pub categories: Vec<ToolCategory>,
}

impl ToolLandscape {
    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(|c| c.tools.len()).sum()
    }
}

impl<'de> Deserialize<'de> for ToolLandscape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LandscapeVisitor;

        impl<'de> Visitor<'de> for LandscapeVisitor {
            type Value = ToolLandscape;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to a list of tools")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, tools)) = access.next_entry::<String, Vec<Tool>>()? {
                    categories.push(ToolCategory { name, tools });
                }
                Ok(ToolLandscape { categories })
            }
        }

        deserializer.deserialize_map(LandscapeVisitor)
    }
}

// ============================================================================
// News
// ============================================================================

/// One analysed news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl NewsItem {
    /// Category used for filtering; empty strings count as absent
    pub fn stored_category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }
}

/// `GET /api/news` body
///
/// `news` stays optional: a body without the array renders the empty-feed
/// message and no filter controls at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsPayload {
    #[serde(default)]
    pub news: Option<Vec<NewsItem>>,
}

// ============================================================================
// Corporate Registry
// ============================================================================

/// Registry record for one company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorporateInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub corporate_number: String,
    #[serde(default)]
    pub full_address: String,
    #[serde(default)]
    pub update_date: String,
    #[serde(default)]
    pub prefecture_name: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub street_number: Option<String>,
}

impl CorporateInfo {
    /// `full_address`, or prefecture + city + street when the registry left it blank
    pub fn display_address(&self) -> String {
        if !self.full_address.trim().is_empty() {
            return self.full_address.clone();
        }
        [&self.prefecture_name, &self.city_name, &self.street_number]
            .iter()
            .filter_map(|part| part.as_deref())
            .collect()
    }
}

/// Error body returned alongside non-success statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
