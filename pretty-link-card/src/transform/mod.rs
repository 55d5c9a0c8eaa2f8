//! The document-level card transform.
//!
//! [`LinkCardTransformer`] walks a tree, picks out card-link paragraphs and
//! resolves all of them concurrently. The free functions below wire it to
//! the HTTP fetcher for the common case.

mod report;
mod transformer;

pub use report::{CardSource, Resolution, TransformReport};
pub use transformer::{is_card_paragraph, LinkCardTransformer};

#[cfg(feature = "http")]
use crate::card::{CardCache, TransformOptions};
#[cfg(feature = "http")]
use crate::errors::CardError;
#[cfg(feature = "http")]
use crate::tree::Node;

/// Transforms a tree in place, fetching pages over HTTP.
#[cfg(feature = "http")]
pub async fn transform_tree(
    tree: &mut Node,
    cache: &dyn CardCache,
    options: TransformOptions,
) -> Result<TransformReport, CardError> {
    let transformer = LinkCardTransformer::http(options)?;
    Ok(transformer.transform(tree, cache).await)
}

/// Transforms a serialized mdast tree, merging `options` over the defaults.
///
/// Fails only when the input is not a document tree or the options are
/// malformed.
#[cfg(feature = "http")]
pub async fn transform_json(
    tree: serde_json::Value,
    cache: &dyn CardCache,
    options: serde_json::Value,
) -> Result<serde_json::Value, CardError> {
    let options = TransformOptions::from_json(options)?;
    let mut tree: Node =
        serde_json::from_value(tree).map_err(|e| CardError::MalformedTree(e.to_string()))?;
    transform_tree(&mut tree, cache, options).await?;
    serde_json::to_value(&tree).map_err(|e| CardError::MalformedTree(e.to_string()))
}
