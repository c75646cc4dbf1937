//! Absolute page URLs.
//!
//! Mirrors how the host builds URLs so canonical links match the URLs the
//! host actually serves:
//!
//! ```text
//! {base_url}/{page path}/{url segments}[/]
//! ```
//!
//! Empty parts are skipped. A trailing slash is added when the template
//! slashes URL segments and segments are present, or when it slashes page
//! URLs and no segments are present.

use crate::page::UrlPolicy;

/// Build an absolute page URL. `None` when `base_url` is empty.
pub fn build_page_url(
    base_url: &str,
    path: &str,
    segments: &str,
    policy: UrlPolicy,
) -> Option<String> {
    if base_url.is_empty() {
        return None;
    }

    let segment = if policy.url_segments { segments } else { "" };
    let mut url = [base_url.trim_end_matches('/'), path.trim_matches('/'), segment]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    let slash_segments = policy.url_segments && policy.slash_url_segments && !segments.is_empty();
    let slash_page = policy.slash_urls && segments.is_empty();
    if slash_segments || slash_page {
        url.push('/');
    }

    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLASH_URLS: UrlPolicy = UrlPolicy {
        url_segments: false,
        slash_url_segments: false,
        slash_urls: true,
    };

    #[test]
    fn test_empty_base_url() {
        assert_eq!(build_page_url("", "/about/", "", SLASH_URLS), None);
    }

    #[test]
    fn test_join_trims_slashes() {
        assert_eq!(
            build_page_url("https://example.com/", "/about/team/", "", SLASH_URLS).as_deref(),
            Some("https://example.com/about/team/")
        );
        assert_eq!(
            build_page_url("https://example.com", "/about/", "", UrlPolicy::default()).as_deref(),
            Some("https://example.com/about")
        );
    }

    #[test]
    fn test_home_page() {
        assert_eq!(
            build_page_url("https://example.com", "/", "", SLASH_URLS).as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn test_segments_ignored_without_template_support() {
        // Segments present but not allowed: no segment, and no page slash either
        assert_eq!(
            build_page_url("https://example.com", "/blog/", "page2", SLASH_URLS).as_deref(),
            Some("https://example.com/blog")
        );
    }

    #[test]
    fn test_segments_with_slash() {
        let policy = UrlPolicy {
            url_segments: true,
            slash_url_segments: true,
            slash_urls: true,
        };
        assert_eq!(
            build_page_url("https://example.com", "/blog/", "tag/rust", policy).as_deref(),
            Some("https://example.com/blog/tag/rust/")
        );
    }

    #[test]
    fn test_segments_without_slash() {
        let policy = UrlPolicy {
            url_segments: true,
            slash_url_segments: false,
            slash_urls: true,
        };
        assert_eq!(
            build_page_url("https://example.com", "/blog/", "page2", policy).as_deref(),
            Some("https://example.com/blog/page2")
        );
        // Without segments the page slash applies
        assert_eq!(
            build_page_url("https://example.com", "/blog/", "", policy).as_deref(),
            Some("https://example.com/blog/")
        );
    }
}
