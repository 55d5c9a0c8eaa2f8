//! Rewrites card-link paragraphs into rendered link cards.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

use super::report::{CardSource, Resolution, TransformReport};
use crate::card::{
    extract_metadata, resolve_url, CardCache, CardData, CardRenderer, HtmlFetcher,
    LoggingTransformObserver, TransformObserver, TransformOptions,
};
use crate::tree::{select_mut, Node, NodeKind};

/// Whether a paragraph follows the card-link convention: its only child is
/// an untitled link with a target whose only child is the delimiter text.
#[must_use]
pub fn is_card_paragraph(node: &Node, delimiter: &str) -> bool {
    if node.kind != NodeKind::Paragraph {
        return false;
    }
    let [link] = node.children().unwrap_or_default() else {
        return false;
    };
    if link.kind != NodeKind::Link || link.has_title() || link.url().map_or(true, str::is_empty) {
        return false;
    }
    matches!(
        link.children().unwrap_or_default(),
        [text] if text.kind == NodeKind::Text && text.value() == Some(delimiter)
    )
}

fn card_link_mut<'a>(paragraph: &'a mut Node, delimiter: &str) -> Option<&'a mut Node> {
    if !is_card_paragraph(paragraph, delimiter) {
        return None;
    }
    paragraph.children_mut()?.first_mut()
}

/// Resolves card links in document trees.
pub struct LinkCardTransformer {
    fetcher: Arc<dyn HtmlFetcher>,
    observer: Arc<dyn TransformObserver>,
    renderer: CardRenderer,
    options: TransformOptions,
}

impl LinkCardTransformer {
    /// Creates a transformer fetching pages through `fetcher`.
    #[must_use]
    pub fn new(fetcher: Arc<dyn HtmlFetcher>, options: TransformOptions) -> Self {
        Self {
            fetcher,
            observer: Arc::new(LoggingTransformObserver),
            renderer: CardRenderer::new(options.favicon_service.clone()),
            options,
        }
    }

    /// Creates a transformer fetching pages over HTTP.
    #[cfg(feature = "http")]
    pub fn http(options: TransformOptions) -> Result<Self, crate::errors::CardError> {
        let fetcher = crate::card::HttpFetcher::new(&options.user_agent)?;
        Ok(Self::new(Arc::new(fetcher), options))
    }

    /// Sets the observer receiving resolution events.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn TransformObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Gets the configuration.
    #[must_use]
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Rewrites every card link in `tree` into an HTML card, in place.
    ///
    /// All eligible links are resolved concurrently on the calling task and
    /// the call returns once every one of them has settled. Per-link failures
    /// never surface: invalid URLs are skipped and failed fetches render a
    /// fallback card.
    pub async fn transform(&self, tree: &mut Node, cache: &dyn CardCache) -> TransformReport {
        let mut report = TransformReport::default();
        let mut tasks = Vec::new();

        for paragraph in select_mut(tree, &NodeKind::Paragraph) {
            let Some(link) = card_link_mut(paragraph, &self.options.delimiter) else {
                continue;
            };
            report.eligible += 1;

            let Some(raw) = link.url() else {
                continue;
            };
            match resolve_url(raw) {
                Ok(url) => tasks.push(self.resolve_into(link, url, cache)),
                Err(err) => {
                    report.skipped_invalid += 1;
                    self.observer.on_invalid_url(raw, &err.to_string());
                }
            }
        }

        for resolution in join_all(tasks).await {
            report.record(&resolution);
        }

        if report.eligible > 0 {
            tracing::info!(
                eligible = report.eligible,
                cache_hits = report.cache_hits,
                fetched = report.fetched,
                fallbacks = report.fallbacks,
                skipped_invalid = report.skipped_invalid,
                "Link cards resolved"
            );
        }
        report
    }

    async fn resolve_into(&self, link: &mut Node, url: Url, cache: &dyn CardCache) -> Resolution {
        let resolution = self.resolve(&url, cache).await;
        link.set_html(resolution.html.clone());
        resolution
    }

    /// Produces the card for one normalized URL, consulting the cache first.
    pub async fn resolve(&self, url: &Url, cache: &dyn CardCache) -> Resolution {
        let key = url.as_str();
        let mut cache_errors = 0;

        match cache.get(key).await {
            Ok(Some(html)) if !html.is_empty() => {
                self.observer.on_cache_hit(key);
                return Resolution {
                    html,
                    source: CardSource::Cached,
                    cache_errors,
                };
            }
            Ok(_) => {}
            Err(err) => {
                cache_errors += 1;
                self.observer.on_cache_error(key, &err.to_string());
            }
        }

        let started = Instant::now();
        let (html, source) = match self.fetcher.fetch(url, self.options.timeout()).await {
            Ok(page) => {
                let data = CardData::from_meta(extract_metadata(&page), url);
                self.observer
                    .on_fetch_complete(key, started.elapsed().as_secs_f64() * 1000.0);
                (self.renderer.render(&data), CardSource::Fetched)
            }
            Err(err) => {
                self.observer.on_fallback(key, &err.to_string());
                (
                    self.renderer.render(&CardData::fallback(url)),
                    CardSource::Fallback,
                )
            }
        };

        if source == CardSource::Fetched || self.options.cache_fallback {
            if let Err(err) = cache.set(key, html.clone()).await {
                cache_errors += 1;
                self.observer.on_cache_error(key, &err.to_string());
            }
        }

        Resolution {
            html,
            source,
            cache_errors,
        }
    }
}

impl std::fmt::Debug for LinkCardTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkCardTransformer")
            .field("options", &self.options)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}
