//! Head tag pipeline.
//!
//! Turns resolved values into tag descriptors, in this order:
//!
//! | Group     | Tags                                                        |
//! |-----------|-------------------------------------------------------------|
//! | general   | `title`, charset, canonical, viewport, description, keywords |
//! | og        | `og:title` … `og:image:alt` (if `render_og`)                |
//! | twitter   | `twitter:card` … `twitter:image:alt` (if `render_twitter`)  |
//! | facebook  | `fb:app_id` (if `render_facebook`)                          |
//! | hreflang  | `link rel="alternate"` per language                         |
//!
//! A tag whose value is empty is not collected at all.

mod og;

use crate::host::HostServices;
use crate::resolve::Resolver;
use crate::tags::{Attrs, TagCollector, TagDescriptor};

/// Collect every tag for the resolver's page.
pub fn collect<H: HostServices>(r: &Resolver<'_, H>) -> TagCollector {
    let config = r.config();
    let mut tags = TagCollector::new();

    general(&mut tags, r);

    if config.render_og {
        og::open_graph(&mut tags, r);
    }
    if config.render_twitter {
        og::twitter(&mut tags, r);
    }
    if config.render_facebook {
        og::facebook(&mut tags, r);
    }

    for alternate in r.alternates() {
        tags.link([
            ("rel", "alternate"),
            ("href", alternate.href.as_str()),
            ("hreflang", alternate.hreflang.as_str()),
        ]);
    }

    tags
}

fn general<H: HostServices>(tags: &mut TagCollector, r: &Resolver<'_, H>) {
    let config = r.config();

    let document_title = r.document_title();
    if !document_title.is_empty() {
        tags.push(TagDescriptor::known(
            "title",
            Attrs::new(),
            Some(document_title.to_string()),
        ));
    }
    if !config.charset.is_empty() {
        tags.meta([("charset", config.charset.as_str())]);
    }
    if let Some(url) = r.page_url() {
        tags.link([("rel", "canonical"), ("href", url)]);
    }
    if !config.viewport.is_empty() {
        tags.meta([("name", "viewport"), ("content", config.viewport.as_str())]);
    }
    if let Some(description) = r.description() {
        tags.meta([("name", "description"), ("content", description)]);
    }
    if let Some(keywords) = r.keywords() {
        tags.meta([("name", "keywords"), ("content", keywords)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetadataConfig;
    use crate::render::render;
    use crate::testing::{MockHost, MockImage, MockPage};

    fn page() -> MockPage {
        MockPage::new("/about/")
            .field("title", "About")
            .field("summary", "About us")
            .image(
                "image",
                MockImage::new("team.jpg", 2400, 1260).with_field("alt", "The team"),
            )
    }

    fn rendered(config: &MetadataConfig, host: &MockHost, page: &MockPage) -> String {
        let resolver = Resolver::new(config, host, page);
        render(collect(&resolver).tags()).unwrap_or_default()
    }

    #[test]
    fn test_default_pipeline() {
        let config = MetadataConfig {
            base_url: "https://example.com".into(),
            ..MetadataConfig::default()
        };
        let html = rendered(&config, &MockHost::new(), &page());

        let expected = concat!(
            r#"<title>About - Site name</title>"#,
            r#"<meta charset="utf-8">"#,
            r#"<link rel="canonical" href="https://example.com/about/">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
            r#"<meta name="description" content="About us">"#,
            r#"<meta property="og:title" content="About">"#,
            r#"<meta property="og:site_name" content="Site name">"#,
            r#"<meta property="og:type" content="website">"#,
            r#"<meta property="og:url" content="https://example.com/about/">"#,
            r#"<meta property="og:description" content="About us">"#,
            r#"<meta property="og:image" content="https://cdn.example.com/team.jpg">"#,
            r#"<meta property="og:image:width" content="1200">"#,
            r#"<meta property="og:image:height" content="630">"#,
            r#"<meta property="og:image:alt" content="The team">"#,
            r#"<meta name="twitter:card" content="summary_large_image">"#,
            r#"<meta name="twitter:title" content="About">"#,
            r#"<meta name="twitter:description" content="About us">"#,
            r#"<meta name="twitter:image" content="https://cdn.example.com/team.jpg">"#,
            r#"<meta property="twitter:image:alt" content="The team">"#,
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_og_disabled() {
        let config = MetadataConfig {
            render_og: false,
            ..MetadataConfig::default()
        };
        let host = MockHost::new();
        let page = page();
        let resolver = Resolver::new(&config, &host, &page);
        let tags = collect(&resolver);

        let has_og = tags.tags().iter().any(|t| {
            t.attrs
                .iter()
                .any(|(_, v)| v.as_str().is_some_and(|s| s.starts_with("og:")))
        });
        assert!(!has_og);
    }

    #[test]
    fn test_twitter_and_facebook_options() {
        let config = MetadataConfig {
            render_og: false,
            twitter_site: Some("@example".into()),
            twitter_creator: Some(String::new()),
            render_facebook: true,
            facebook_app_id: Some("1234".into()),
            ..MetadataConfig::default()
        };
        let html = rendered(&config, &MockHost::new(), &page());

        assert!(html.contains(r#"<meta name="twitter:site" content="@example">"#));
        assert!(!html.contains("twitter:creator"));
        assert!(html.ends_with(r#"<meta property="fb:app_id" content="1234">"#));
    }

    #[test]
    fn test_facebook_disabled_ignores_app_id() {
        let config = MetadataConfig {
            facebook_app_id: Some("1234".into()),
            ..MetadataConfig::default()
        };
        let html = rendered(&config, &MockHost::new(), &page());
        assert!(!html.contains("fb:app_id"));
    }

    #[test]
    fn test_no_image_no_image_tags() {
        let config = MetadataConfig::default();
        let page = MockPage::new("/").field("title", "Home");
        let html = rendered(&config, &MockHost::new(), &page);
        assert!(!html.contains("og:image"));
        assert!(!html.contains("twitter:image"));
    }

    #[test]
    fn test_keywords_tag() {
        let config = MetadataConfig::default();
        let page = page().field("keywords", "rust, metadata");
        let html = rendered(&config, &MockHost::new(), &page);
        assert!(html.contains(r#"<meta name="keywords" content="rust, metadata">"#));
    }

    #[test]
    fn test_hreflang_links_last() {
        let config = MetadataConfig {
            base_url: "https://example.com".into(),
            render_hreflang: true,
            render_og: false,
            render_twitter: false,
            ..MetadataConfig::default()
        };
        let host = MockHost::multilingual(&[("default", "en"), ("finnish", "fi")]);
        let page = page().localized("finnish", "/fi/tietoa/");
        let html = rendered(&config, &host, &page);

        assert!(html.ends_with(concat!(
            r#"<link rel="alternate" href="https://example.com/about/" hreflang="en">"#,
            r#"<link rel="alternate" href="https://example.com/fi/tietoa/" hreflang="fi">"#,
        )));
    }

    #[test]
    fn test_everything_empty_renders_none() {
        let config = MetadataConfig {
            base_url: String::new(),
            charset: String::new(),
            viewport: String::new(),
            site_name: String::new(),
            render_og: false,
            render_twitter: false,
            ..MetadataConfig::default()
        };
        let host = MockHost::new();
        let page = MockPage::new("/");
        let resolver = Resolver::new(&config, &host, &page);
        let tags = collect(&resolver);
        assert!(tags.is_empty());
        assert_eq!(render(tags.tags()), None);
    }
}
