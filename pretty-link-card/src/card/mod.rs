//! Link card resolution components.
//!
//! This module provides:
//! - URL normalization and asset absolutization
//! - Page fetching behind the [`HtmlFetcher`] protocol
//! - Regex-based metadata extraction
//! - Card rendering with graceful fallbacks
//! - The [`CardCache`] protocol and in-memory implementations
//! - Configuration for the transform

mod cache;
mod config;
mod extract;
#[cfg(feature = "http")]
mod fetch;
mod models;
mod protocols;
mod render;
mod urls;

pub use cache::{MemoryCache, NoCache};
pub use config::{TransformOptions, DEFAULT_FAVICON_SERVICE};
pub use extract::{extract_metadata, favicon_href, head_section, meta_content, title_text};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use models::{CardData, PageMeta};
#[cfg(test)]
pub use protocols::MockHtmlFetcher;
pub use protocols::{
    CardCache, HtmlFetcher, LoggingTransformObserver, NoOpTransformObserver, TransformObserver,
};
pub use render::{render_card, CardRenderer};
pub use urls::{absolutize, domain_of, resolve_url};
