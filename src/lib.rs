//! Markup metadata - resolve page attributes into document head tags.
//!
//! Given a host page and a [`MetadataConfig`], produce the `<title>`,
//! `<meta>` and `<link>` tags of a document head: charset, canonical URL,
//! description, Open Graph, Twitter Card, Facebook and hreflang.
//!
//! # Example
//!
//! ```ignore
//! let config = MetadataConfig::from_path(Path::new("metadata.toml"))?;
//! let metadata = Metadata::new(&config, &host);
//!
//! if let Some(head) = metadata.render(&page, Overrides::default()) {
//!     out.push_str(&head);
//! }
//! ```
//!
//! The host supplies pages ([`PageLike`]), images ([`ImageLike`]) and
//! services ([`HostServices`]). Rendering never fails: values the host
//! cannot provide simply drop their tags.

pub mod config;
pub mod host;
pub mod image;
pub mod logger;
pub mod page;
pub mod render;
pub mod resolve;
pub mod seo;
pub mod tags;
pub mod utils;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, MetadataConfig};
pub use host::HostServices;
pub use image::{ImageLike, Resize};
pub use page::{FieldValue, Language, PageLike, UrlPolicy};
pub use render::{render, render_escaped};
pub use resolve::{Alternate, ImageOf, Overrides, ResolvedContext, Resolver};
pub use tags::{AttrValue, Attrs, KeyedTagCollector, MetaError, TagCollector, TagDescriptor};
pub use utils::text::TruncateMode;

/// Per-session entry point: configuration plus host services.
///
/// Cheap to construct; every call resolves a page from scratch.
pub struct Metadata<'a, H: HostServices> {
    config: &'a MetadataConfig,
    host: &'a H,
}

impl<'a, H: HostServices> Metadata<'a, H> {
    pub fn new(config: &'a MetadataConfig, host: &'a H) -> Self {
        Self { config, host }
    }

    /// Resolved values for `page`, without building tags.
    pub fn resolve(&self, page: &H::Page, overrides: Overrides<ImageOf<H>>) -> ResolvedContext<ImageOf<H>> {
        self.resolver(page, overrides).context()
    }

    /// Tag descriptors for `page`, in render order.
    pub fn collect(&self, page: &H::Page, overrides: Overrides<ImageOf<H>>) -> Vec<TagDescriptor> {
        seo::collect(&self.resolver(page, overrides)).into_tags()
    }

    /// Head markup for `page`. `None` when no tag applies.
    pub fn render(&self, page: &H::Page, overrides: Overrides<ImageOf<H>>) -> Option<String> {
        render::render(&self.collect(page, overrides))
    }

    fn resolver<'p>(&self, page: &'p H::Page, overrides: Overrides<ImageOf<H>>) -> Resolver<'p, H>
    where
        'a: 'p,
    {
        Resolver::new(self.config, self.host, page).with_overrides(overrides)
    }
}
