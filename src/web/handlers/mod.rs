//! Axum handlers: full pages and the HTMX fragments they load

pub mod fragments;
pub mod pages;
