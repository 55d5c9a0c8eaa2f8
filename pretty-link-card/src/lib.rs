//! # Pretty Link Card
//!
//! Rewrites card links in markdown document trees into rich link preview
//! cards at build time.
//!
//! A card link is a paragraph holding nothing but an untitled link whose
//! visible text is the delimiter (`$card` by default):
//!
//! ```markdown
//! [$card](https://example.com/post)
//! ```
//!
//! Each one is resolved by:
//!
//! - **Normalizing** the target into an absolute URL
//! - **Consulting the cache** keyed by that URL
//! - **Fetching** the page under a timeout on a miss
//! - **Extracting** title, description, preview image and favicon
//! - **Rendering** a fixed-structure HTML fragment, with a fallback card
//!   when the page cannot be fetched
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pretty_link_card::prelude::*;
//!
//! let cache = MemoryCache::new();
//! let report = transform_tree(&mut tree, &cache, TransformOptions::default()).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod card;
pub mod errors;
pub mod transform;
pub mod tree;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "http")]
    pub use crate::card::HttpFetcher;
    pub use crate::card::{
        CardCache, CardData, CardRenderer, HtmlFetcher, MemoryCache, NoCache, TransformOptions,
    };
    pub use crate::errors::{CacheError, CardError, FetchError};
    #[cfg(feature = "http")]
    pub use crate::transform::{transform_json, transform_tree};
    pub use crate::transform::{LinkCardTransformer, TransformReport};
    pub use crate::tree::{Node, NodeKind};
}
