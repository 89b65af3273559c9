//! Runtime configuration
//!
//! Read once at start-up and handed to every component through `AppState`.
//! Server: values come from the systemd environment.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://ai-news-api-501254184747.asia-northeast1.run.app";
pub const DEFAULT_SITE_TITLE: &str = "AI PM Dashboard";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Upstream API base URL, without trailing slash
    pub api_base_url: String,
    /// Directory holding `header.html` and the stylesheet
    pub static_dir: PathBuf,
    pub port: u16,
    /// Text of the fixed title link in the header
    pub site_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            static_dir: PathBuf::from("static"),
            port: 3000,
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Build from `DASHBOARD_API_URL`, `STATIC_DIR`, `PORT` and `SITE_TITLE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_base_url: get("DASHBOARD_API_URL")
                .map(|url| normalize_base_url(&url))
                .unwrap_or(defaults.api_base_url),
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            port: get("PORT").and_then(|p| p.trim().parse().ok()).unwrap_or(defaults.port),
            site_title: get("SITE_TITLE").unwrap_or(defaults.site_title),
        }
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = normalize_base_url(url);
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn header_fragment_path(&self) -> PathBuf {
        self.static_dir.join("header.html")
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_values_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("DASHBOARD_API_URL", "http://localhost:8080/"),
            ("STATIC_DIR", "/opt/dashboard/static"),
            ("PORT", "8081"),
            ("SITE_TITLE", "Dashboard"),
        ]
        .into_iter()
        .collect();
        let config = DashboardConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.static_dir, PathBuf::from("/opt/dashboard/static"));
        assert_eq!(config.port, 8081);
        assert_eq!(config.site_title, "Dashboard");
        assert_eq!(
            config.header_fragment_path(),
            PathBuf::from("/opt/dashboard/static/header.html")
        );
    }

    #[test]
    fn test_invalid_port_keeps_default() {
        let config = DashboardConfig::from_lookup(|k| (k == "PORT").then(|| "eighty".to_string()));
        assert_eq!(config.port, 3000);
    }
}
