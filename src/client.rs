//! Typed client for the upstream dashboard API
//!
//! One GET per call: no retries, no caching, no timeout. Bodies are read as
//! text and parsed with serde_json so a malformed payload is reported as
//! [`FetchError::MalformedBody`] rather than a transport error.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::models::{ApiErrorBody, CorporateInfo, NewsPayload, ToolLandscape};

#[derive(Debug, Clone)]
pub struct DashboardApiClient {
    http: Client,
    base_url: String,
}

impl DashboardApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}`: category → tools
    pub async fn fetch_landscape(&self) -> Result<ToolLandscape, FetchError> {
        tracing::debug!("Fetching tool landscape from {}", self.base_url);
        let response = self.http.get(&self.base_url).send().await?;
        parse_json(response).await
    }

    /// `GET {base}/api/news`
    pub async fn fetch_news(&self) -> Result<NewsPayload, FetchError> {
        let url = format!("{}/api/news", self.base_url);
        tracing::debug!("Fetching news from {}", url);
        let response = self.http.get(&url).send().await?;
        parse_json(response).await
    }

    /// `GET {base}/api/corporate_info?name=<company>`
    pub async fn fetch_corporate_info(&self, company: &str) -> Result<CorporateInfo, FetchError> {
        let url = format!("{}/api/corporate_info", self.base_url);
        tracing::debug!("Fetching corporate info for '{}'", company);
        let response = self
            .http
            .get(&url)
            .query(&[("name", company)])
            .send()
            .await?;
        parse_json(response).await
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&body).ok().map(|b| b.error);
        return Err(FetchError::Status { status, message });
    }

    Ok(serde_json::from_str(&body)?)
}
