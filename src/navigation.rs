//! Header navigation: active link detection
//!
//! The shared `header.html` fragment is injected verbatim; every anchor whose
//! `href` corresponds to the current page gets the `active` class.

use std::sync::OnceLock;

use regex::{Captures, Regex};

pub const ACTIVE_CLASS: &str = "active";

/// `/` or any path ending in `/index.html`
pub fn is_root_path(path: &str) -> bool {
    path == "/" || path.ends_with("/index.html")
}

/// Whether a nav link targeting `link_path` marks the page at `current_path`
///
/// Root pages match only the `/` link. Every other page matches each non-`/`
/// link whose target is a suffix of the current path.
pub fn is_active_link(current_path: &str, link_path: &str) -> bool {
    if is_root_path(current_path) && link_path == "/" {
        return true;
    }
    link_path != "/" && current_path.ends_with(link_path)
}

fn anchor_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<a\b[^>]*>").expect("valid anchor regex"))
}

// Attribute names must follow whitespace so `data-href` / `data-class` never match

fn href_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\shref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#).expect("valid href regex")
    })
}

fn class_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\s(class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))"#).expect("valid class regex")
    })
}

/// Target path of an anchor tag, if it has an `href`
fn anchor_href(tag: &str) -> Option<&str> {
    let caps = href_attr().captures(tag)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

/// Add the `active` class to an opening anchor tag
fn add_active_class(tag: &str) -> String {
    if let Some(caps) = class_attr().captures(tag) {
        let existing = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or("");
        if existing.split_whitespace().any(|c| c == ACTIVE_CLASS) {
            return tag.to_string();
        }
        let merged = if existing.trim().is_empty() {
            ACTIVE_CLASS.to_string()
        } else {
            format!("{} {}", existing.trim_end(), ACTIVE_CLASS)
        };
        let attr = caps.get(1).map(|m| m.range()).unwrap_or(0..0);
        return format!("{}class=\"{}\"{}", &tag[..attr.start], merged, &tag[attr.end..]);
    }

    let insert_at = if tag.ends_with("/>") { tag.len() - 2 } else { tag.len() - 1 };
    format!("{} class=\"{}\"{}", tag[..insert_at].trim_end(), ACTIVE_CLASS, &tag[insert_at..])
}

/// Rewrite `fragment`, marking every anchor that matches `current_path` active
///
/// All matching anchors are marked; anchors without an `href` are left alone.
pub fn mark_active_links(fragment: &str, current_path: &str) -> String {
    anchor_tag()
        .replace_all(fragment, |caps: &Captures| {
            let tag = &caps[0];
            match anchor_href(tag) {
                Some(target) if is_active_link(current_path, target) => add_active_class(tag),
                _ => tag.to_string(),
            }
        })
        .into_owned()
}
