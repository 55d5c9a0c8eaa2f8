//! Data models for page metadata and rendered cards.

use serde::{Deserialize, Serialize};
use url::Url;

use super::urls::absolutize;

/// Metadata scraped from a page, exactly as found in its markup.
///
/// Image and favicon references may still be relative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// `og:title` or `<title>` text.
    pub title: String,
    /// `og:description` or `description` meta content.
    pub description: String,
    /// `og:image` reference.
    pub og_image: String,
    /// Icon `<link>` reference.
    pub favicon: String,
}

/// Everything the renderer needs to produce a card.
///
/// Empty strings mean "not available"; `url` is always absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    /// Page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Absolute link target.
    pub url: String,
    /// Absolute preview image URL.
    pub og_image: String,
    /// Absolute favicon URL.
    pub favicon: String,
}

impl CardData {
    /// Builds card data from scraped metadata, resolving asset references
    /// against the page URL.
    #[must_use]
    pub fn from_meta(meta: PageMeta, url: &Url) -> Self {
        Self {
            og_image: absolutize(&meta.og_image, url),
            favicon: absolutize(&meta.favicon, url),
            title: meta.title,
            description: meta.description,
            url: url.to_string(),
        }
    }

    /// Card data carrying nothing but the URL.
    #[must_use]
    pub fn fallback(url: &Url) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_meta_absolutizes_assets() {
        let url = Url::parse("https://ex.com/post").unwrap();
        let meta = PageMeta {
            title: "Post".to_string(),
            description: String::new(),
            og_image: "/img/a.png".to_string(),
            favicon: String::new(),
        };

        let data = CardData::from_meta(meta, &url);
        assert_eq!(data.og_image, "https://ex.com/img/a.png");
        assert_eq!(data.favicon, "");
        assert_eq!(data.url, "https://ex.com/post");
        assert_eq!(data.title, "Post");
    }

    #[test]
    fn test_fallback_only_has_url() {
        let url = Url::parse("https://ex.com/").unwrap();
        let data = CardData::fallback(&url);
        assert_eq!(
            data,
            CardData {
                url: "https://ex.com/".to_string(),
                ..Default::default()
            }
        );
    }
}
