//! Web layer: Askama templates served through Axum + HTMX

pub mod handlers;
