//! URL normalization helpers.

use url::Url;

use crate::errors::CardError;

/// Normalizes a link target into an absolute URL.
///
/// Targets that do not start with `http` are assumed to be bare hosts and get
/// an `https://` prefix.
pub fn resolve_url(raw: &str) -> Result<Url, CardError> {
    let candidate = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    Url::parse(&candidate).map_err(|e| CardError::invalid_url(raw, e.to_string()))
}

/// Resolves a possibly relative asset reference against a page URL.
///
/// Returns an empty string for an empty reference or when resolution fails.
#[must_use]
pub fn absolutize(reference: &str, base: &Url) -> String {
    let reference = reference.trim();
    if reference.is_empty() {
        return String::new();
    }
    base.join(reference)
        .map(|url| url.to_string())
        .unwrap_or_default()
}

/// Extracts the host of a URL, or an empty string.
#[must_use]
pub fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_adds_scheme() {
        let url = resolve_url("example.com/post").unwrap();
        assert_eq!(url.as_str(), "https://example.com/post");
    }

    #[test]
    fn test_resolve_normalizes() {
        assert_eq!(
            resolve_url("https://Example.COM").unwrap().as_str(),
            "https://example.com/"
        );
        assert_eq!(
            resolve_url("http://example.com/a/../b").unwrap().as_str(),
            "http://example.com/b"
        );
    }

    #[test]
    fn test_resolve_invalid() {
        let err = resolve_url("http://exa mple.com").unwrap_err();
        assert!(matches!(err, CardError::InvalidUrl { ref raw, .. } if raw == "http://exa mple.com"));
        assert!(resolve_url("").is_err());
    }

    #[test]
    fn test_absolutize_relative() {
        let base = Url::parse("https://ex.com/post").unwrap();
        assert_eq!(absolutize("/img/a.png", &base), "https://ex.com/img/a.png");
        assert_eq!(absolutize("icon.ico", &base), "https://ex.com/icon.ico");
        assert_eq!(
            absolutize("//cdn.ex.com/a.png", &base),
            "https://cdn.ex.com/a.png"
        );
    }

    #[test]
    fn test_absolutize_absolute_and_empty() {
        let base = Url::parse("https://ex.com/post").unwrap();
        assert_eq!(
            absolutize("https://other.com/x.png", &base),
            "https://other.com/x.png"
        );
        assert_eq!(absolutize("", &base), "");
        assert_eq!(absolutize("   ", &base), "");
    }

    #[test]
    fn test_absolutize_failure_is_empty() {
        let base = Url::parse("https://ex.com/post").unwrap();
        assert_eq!(absolutize("http://[::1", &base), "");
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("https://blog.ex.com/a?b=c"), "blog.ex.com");
        assert_eq!(domain_of("not a url"), "");
        assert_eq!(domain_of("mailto:someone@ex.com"), "");
    }
}
