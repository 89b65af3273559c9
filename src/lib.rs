//! AI PM Dashboard front server
//!
//! Typed, server-rendered front end for the AI PM dashboard API:
//! - `models`: upstream wire types (tool landscape, news, corporate registry)
//! - `navigation`: active header link detection
//! - `filter`: news category derivation and visibility rules
//! - `modal`: corporate info modal state machine with request tickets
//! - `view_models` / `view_builder`: payload → Askama view data
//! - `client`, `api_server`, `web`: reqwest client and Axum + HTMX server (feature `api`)

pub mod config;
pub mod filter;
pub mod modal;
pub mod models;
pub mod navigation;
pub mod view_builder;
pub mod view_models;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod client;
#[cfg(feature = "api")]
pub mod error;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use models::{CorporateInfo, NewsItem, NewsPayload, Tool, ToolLandscape};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "api")]
pub use client::DashboardApiClient;
#[cfg(feature = "api")]
pub use error::FetchError;
