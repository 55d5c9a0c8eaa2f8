//! Metadata extraction from raw page HTML.
//!
//! Extraction is textual pattern matching, not a DOM parse. Tags are located
//! with regexes and their attributes read in any order with either quote
//! style. Markup that does not match simply leaves the field empty.

use regex::Regex;
use std::sync::LazyLock;

use super::models::PageMeta;

static HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<head\b[^>]*>.*?</head>").expect("valid head pattern"));

static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid meta pattern"));

static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("valid link pattern"));

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title\b[^>]*>([^<]+)</title>").expect("valid title pattern")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)([a-z_:][-a-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid attribute pattern")
});

/// Extracts card metadata from a page.
#[must_use]
pub fn extract_metadata(html: &str) -> PageMeta {
    let source = head_section(html).unwrap_or(html);

    let title = meta_content(source, "og:title")
        .or_else(|| title_text(source))
        .unwrap_or_default();
    let description = meta_content(source, "og:description")
        .or_else(|| meta_content(source, "description"))
        .unwrap_or_default();
    let og_image = meta_content(source, "og:image").unwrap_or_default();
    let favicon = favicon_href(source).unwrap_or_default();

    PageMeta {
        title,
        description,
        og_image,
        favicon,
    }
}

/// Returns the `<head>...</head>` span if the document has one.
#[must_use]
pub fn head_section(html: &str) -> Option<&str> {
    HEAD.find(html).map(|m| m.as_str())
}

/// Reads the `content` of the first meta tag whose `property` or `name`
/// equals `key`, ignoring case.
#[must_use]
pub fn meta_content(source: &str, key: &str) -> Option<String> {
    META_TAG.find_iter(source).find_map(|tag| {
        let attrs = attributes(tag.as_str());
        let matches_key = attrs.iter().any(|(name, value)| {
            (name == "property" || name == "name") && value.eq_ignore_ascii_case(key)
        });
        if !matches_key {
            return None;
        }
        attrs
            .into_iter()
            .find(|(name, _)| name == "content")
            .and_then(|(_, value)| non_empty(&value))
    })
}

/// Reads the text content of the `<title>` element.
#[must_use]
pub fn title_text(source: &str) -> Option<String> {
    TITLE
        .captures(source)
        .and_then(|caps| caps.get(1))
        .and_then(|m| non_empty(m.as_str()))
}

/// Reads the `href` of the first `<link>` whose `rel` mentions `icon`.
#[must_use]
pub fn favicon_href(source: &str) -> Option<String> {
    LINK_TAG.find_iter(source).find_map(|tag| {
        let attrs = attributes(tag.as_str());
        let is_icon = attrs
            .iter()
            .any(|(name, value)| name == "rel" && value.to_ascii_lowercase().contains("icon"));
        if !is_icon {
            return None;
        }
        attrs
            .into_iter()
            .find(|(name, _)| name == "href")
            .and_then(|(_, value)| non_empty(&value))
    })
}

/// Parses the quoted attributes of a single tag. Names are lowercased.
fn attributes(tag: &str) -> Vec<(String, String)> {
    ATTRIBUTE
        .captures_iter(tag)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_ascii_lowercase();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str().to_string();
            Some((name, value))
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
