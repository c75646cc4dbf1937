//! Social tag families: Open Graph, Twitter Card and Facebook.
//!
//! Each family is gated by its `render_*` option. Page-level values come
//! from the resolver; card type, handles and app id come from config.

use crate::host::HostServices;
use crate::image::ImageLike;
use crate::resolve::Resolver;
use crate::tags::{Attrs, TagCollector};

/// `og:*` tags, including the image block when an image resolved.
pub fn open_graph<H: HostServices>(tags: &mut TagCollector, r: &Resolver<'_, H>) {
    let config = r.config();

    let page_title = r.page_title();
    if !page_title.is_empty() {
        property(tags, "og:title", page_title);
    }
    if !config.site_name.is_empty() {
        property(tags, "og:site_name", &config.site_name);
    }
    if !config.og_type.is_empty() {
        property(tags, "og:type", &config.og_type);
    }
    if let Some(url) = r.page_url() {
        property(tags, "og:url", url);
    }
    if let Some(description) = r.description() {
        property(tags, "og:description", description);
    }

    if let Some(image) = r.image() {
        property(tags, "og:image", &image.http_url());
        tags.meta(
            Attrs::new()
                .with("property", "og:image:width")
                .with("content", image.width()),
        );
        tags.meta(
            Attrs::new()
                .with("property", "og:image:height")
                .with("content", image.height()),
        );
        if let Some(alt) = r.image_alt() {
            property(tags, "og:image:alt", alt);
        }
    }
}

/// `twitter:*` tags.
pub fn twitter<H: HostServices>(tags: &mut TagCollector, r: &Resolver<'_, H>) {
    let config = r.config();

    if !config.twitter_card.is_empty() {
        name(tags, "twitter:card", &config.twitter_card);
    }
    if let Some(site) = non_empty(&config.twitter_site) {
        name(tags, "twitter:site", site);
    }
    if let Some(creator) = non_empty(&config.twitter_creator) {
        name(tags, "twitter:creator", creator);
    }

    let page_title = r.page_title();
    if !page_title.is_empty() {
        name(tags, "twitter:title", page_title);
    }
    if let Some(description) = r.description() {
        name(tags, "twitter:description", description);
    }

    if let Some(image) = r.image() {
        name(tags, "twitter:image", &image.http_url());
        // Emitted with `property`, matching established markup
        if let Some(alt) = r.image_alt() {
            property(tags, "twitter:image:alt", alt);
        }
    }
}

/// `fb:*` tags.
pub fn facebook<H: HostServices>(tags: &mut TagCollector, r: &Resolver<'_, H>) {
    if let Some(app_id) = non_empty(&r.config().facebook_app_id) {
        property(tags, "fb:app_id", app_id);
    }
}

fn property(tags: &mut TagCollector, property: &str, content: &str) {
    tags.meta([("property", property), ("content", content)]);
}

fn name(tags: &mut TagCollector, name: &str, content: &str) {
    tags.meta([("name", name), ("content", content)]);
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
