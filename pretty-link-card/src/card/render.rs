//! HTML rendering of link cards.
//!
//! The markup and class names are consumed by downstream stylesheets and are
//! stored verbatim in the cache, so their structure must not drift.

use super::config::DEFAULT_FAVICON_SERVICE;
use super::models::CardData;
use super::urls::domain_of;

/// Renders [`CardData`] into a card fragment.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    favicon_service: String,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_FAVICON_SERVICE)
    }
}

impl CardRenderer {
    /// Creates a renderer using the given favicon service base URL.
    #[must_use]
    pub fn new(favicon_service: impl Into<String>) -> Self {
        Self {
            favicon_service: favicon_service.into(),
        }
    }

    /// The favicon URL for a card: the page's own icon, else the service
    /// lookup for its domain, else empty.
    #[must_use]
    pub fn favicon_src(&self, data: &CardData, domain: &str) -> String {
        if !data.favicon.is_empty() {
            data.favicon.clone()
        } else if domain.is_empty() {
            String::new()
        } else {
            format!("{}?domain={domain}&sz=64", self.favicon_service)
        }
    }

    /// Renders the card fragment. Never fails.
    #[must_use]
    pub fn render(&self, data: &CardData) -> String {
        let domain = domain_of(&data.url);
        let favicon = self.favicon_src(data, &domain);
        let url = data.url.as_str();
        let title = if data.title.is_empty() {
            url
        } else {
            data.title.as_str()
        };
        let label = if data.title.is_empty() {
            domain.as_str()
        } else {
            data.title.as_str()
        };
        let description = data.description.as_str();
        let image = data.og_image.as_str();

        format!(
            r#"
<div>
  <a target="_blank" rel="noopener noreferrer" href="{url}" class="pretty-link-card-container">
    <div class="pretty-link-card-wrapper">
      <div class="pretty-link-card-title">{title}</div>
      <div class="pretty-link-card-description">{description}</div>
      <div class="pretty-link-card-url">
        <img class="pretty-link-card-favicon" src="{favicon}" alt="{label}-favicon"/>
        <div class="pretty-link-card-link">{url}</div>
      </div>
    </div>
    <div class="pretty-link-card-image-wrapper">
      <img class="pretty-link-card-image" alt="{label}-image" src="{image}" />
    </div>
  </a>
</div>"#
        )
        .trim()
        .to_string()
    }
}

/// Renders a card with the default favicon service.
#[must_use]
pub fn render_card(data: &CardData) -> String {
    CardRenderer::default().render(data)
}
