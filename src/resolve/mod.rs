//! Per-render value resolution.
//!
//! [`Resolver`] derives everything the tag pipeline needs from the current
//! page, host services and configuration. Each value is computed on first
//! access and cached for the rest of the render; nothing outlives the
//! resolver.
//!
//! | Value            | Source                                                  |
//! |------------------|---------------------------------------------------------|
//! | `page_title`     | override, `page_title_selector`                         |
//! | `page_url`       | override, `base_url` + page path + URL segments         |
//! | `document_title` | override, `{page_title} {separator} {site_name}`        |
//! | `description`    | override, `description_selector`, truncated             |
//! | `keywords`       | override, `keywords_selector`                           |
//! | `image`          | override, page, ancestors, fallback page; resized       |
//! | `image_alt`      | `image_alt_field` on the resolved image                 |
//! | `alternates`     | hreflang languages the page is viewable in              |
//!
//! Resolution never fails: a missing value only drops its tags.

mod hreflang;
pub mod url;

pub use hreflang::Alternate;

use std::cell::OnceCell;

use crate::config::MetadataConfig;
use crate::debug;
use crate::host::HostServices;
use crate::image::{ImageLike, Resize};
use crate::page::{FieldValue, Language, PageLike};

/// Image type of a host's pages.
pub type ImageOf<H> = <<H as HostServices>::Page as PageLike>::Image;

// =============================================================================
// Overrides
// =============================================================================

/// Values preassigned by the caller, used instead of page lookups.
///
/// A preassigned description is still truncated and a preassigned image is
/// still resized.
#[derive(Debug, Clone)]
pub struct Overrides<I> {
    pub page_title: Option<String>,
    pub document_title: Option<String>,
    pub page_url: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    /// A single image or a collection (first element wins).
    pub image: Option<FieldValue<I>>,
}

impl<I> Default for Overrides<I> {
    fn default() -> Self {
        Self {
            page_title: None,
            document_title: None,
            page_url: None,
            description: None,
            keywords: None,
            image: None,
        }
    }
}

// =============================================================================
// ResolvedContext
// =============================================================================

/// Snapshot of every resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContext<I> {
    pub page_title: String,
    pub document_title: String,
    pub page_url: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub image: Option<I>,
    pub image_alt: Option<String>,
    pub alternates: Vec<Alternate>,
}

// =============================================================================
// Resolver
// =============================================================================

pub struct Resolver<'a, H: HostServices> {
    config: &'a MetadataConfig,
    host: &'a H,
    page: &'a H::Page,
    overrides: Overrides<ImageOf<H>>,

    page_title: OnceCell<String>,
    document_title: OnceCell<String>,
    page_url: OnceCell<Option<String>>,
    description: OnceCell<Option<String>>,
    keywords: OnceCell<Option<String>>,
    image: OnceCell<Option<ImageOf<H>>>,
    image_alt: OnceCell<Option<String>>,
    alternates: OnceCell<Vec<Alternate>>,
}

impl<'a, H: HostServices> Resolver<'a, H> {
    pub fn new(config: &'a MetadataConfig, host: &'a H, page: &'a H::Page) -> Self {
        Self {
            config,
            host,
            page,
            overrides: Overrides::default(),
            page_title: OnceCell::new(),
            document_title: OnceCell::new(),
            page_url: OnceCell::new(),
            description: OnceCell::new(),
            keywords: OnceCell::new(),
            image: OnceCell::new(),
            image_alt: OnceCell::new(),
            alternates: OnceCell::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides<ImageOf<H>>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn config(&self) -> &MetadataConfig {
        self.config
    }

    /// Page title, empty when the page has none.
    pub fn page_title(&self) -> &str {
        self.page_title.get_or_init(|| match &self.overrides.page_title {
            Some(title) => title.clone(),
            None => lookup_text(self.page, &self.config.page_title_selector).unwrap_or_default(),
        })
    }

    /// Canonical URL of the current page.
    pub fn page_url(&self) -> Option<&str> {
        self.page_url
            .get_or_init(|| {
                self.overrides
                    .page_url
                    .clone()
                    .or_else(|| self.url_for(None))
            })
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    /// URL of the current page in `language`, or its default URL.
    pub fn url_for(&self, language: Option<&Language>) -> Option<String> {
        let path = match language {
            Some(language) => self.page.localized_url(language),
            None => self.page.url(),
        };
        url::build_page_url(
            &self.config.base_url,
            &path,
            &self.host.url_segment_str(),
            self.page.url_policy(),
        )
    }

    /// `{page_title} {separator} {site_name}`, skipping empty parts.
    ///
    /// The separator only appears between a non-empty title and site name.
    pub fn document_title(&self) -> &str {
        self.document_title.get_or_init(|| {
            if let Some(title) = &self.overrides.document_title
                && !title.is_empty()
            {
                return title.clone();
            }

            let page_title = self.page_title();
            let site_name = self.config.site_name.as_str();
            let separator = if !page_title.is_empty() && !site_name.is_empty() {
                self.config.document_title_separator.as_str()
            } else {
                ""
            };

            [page_title, separator, site_name]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// Description truncated per `description_truncate_mode`.
    pub fn description(&self) -> Option<&str> {
        self.description
            .get_or_init(|| {
                let raw = self.overrides.description.clone().or_else(|| {
                    lookup_text(self.page, &self.config.description_selector)
                })?;
                let truncated = self.host.truncate(
                    &raw,
                    self.config.description_max_length,
                    self.config.description_truncate_mode,
                );
                (!truncated.is_empty()).then_some(truncated)
            })
            .as_deref()
    }

    pub fn keywords(&self) -> Option<&str> {
        self.keywords
            .get_or_init(|| {
                self.overrides
                    .keywords
                    .clone()
                    .or_else(|| lookup_text(self.page, &self.config.keywords_selector))
                    .filter(|k| !k.is_empty())
            })
            .as_deref()
    }

    /// Representative image, resized to the configured box.
    pub fn image(&self) -> Option<&ImageOf<H>> {
        self.image
            .get_or_init(|| {
                let (width, height) = self.config.image_size();
                let resize = Resize::for_box(width, height);
                self.find_image().map(|image| resize.apply(image))
            })
            .as_ref()
    }

    /// Alternative text read from the resolved image.
    pub fn image_alt(&self) -> Option<&str> {
        self.image_alt
            .get_or_init(|| {
                let field = self.config.image_alt_field.as_str();
                if field.is_empty() {
                    return None;
                }
                self.image()?.field(field).filter(|alt| !alt.is_empty())
            })
            .as_deref()
    }

    /// Hreflang alternates, in host language order.
    pub fn alternates(&self) -> &[Alternate] {
        self.alternates.get_or_init(|| hreflang::collect(self))
    }

    /// Resolve everything, in pipeline order.
    pub fn context(&self) -> ResolvedContext<ImageOf<H>> {
        ResolvedContext {
            page_title: self.page_title().to_string(),
            page_url: self.page_url().map(str::to_string),
            document_title: self.document_title().to_string(),
            description: self.description().map(str::to_string),
            keywords: self.keywords().map(str::to_string),
            image: self.image().cloned(),
            image_alt: self.image_alt().map(str::to_string),
            alternates: self.alternates().to_vec(),
        }
    }

    // =========================================================================
    // image fallback chain
    // =========================================================================

    /// First image found: override, page, ancestors (closest first), fallback page.
    fn find_image(&self) -> Option<ImageOf<H>> {
        if let Some(image) = self.overrides.image.clone().and_then(FieldValue::into_image) {
            debug!("image"; "using preassigned image");
            return Some(image);
        }

        if let Some(image) = self.image_from(self.page) {
            return Some(image);
        }

        if self.config.image_inherit {
            for (depth, parent) in self.page.parents().iter().rev().enumerate() {
                if let Some(image) = self.image_from(parent) {
                    debug!("image"; "inherited from ancestor {}", depth + 1);
                    return Some(image);
                }
            }
        }

        let id = self.config.image_fallback_page?;
        let Some(fallback) = self.host.find_page(id) else {
            debug!("image"; "fallback page {} not found", id);
            return None;
        };
        let image = self.image_from(&fallback);
        if image.is_some() {
            debug!("image"; "using fallback page {}", id);
        }
        image
    }

    fn image_from(&self, page: &H::Page) -> Option<ImageOf<H>> {
        let selector = self.config.image_selector.as_str();
        if selector.is_empty() {
            return None;
        }
        page.lookup(selector)?.into_image()
    }

    fn host(&self) -> &H {
        self.host
    }

    fn page(&self) -> &H::Page {
        self.page
    }
}

/// Non-empty text value of `selector` on `page`.
fn lookup_text<P: PageLike>(page: &P, selector: &str) -> Option<String> {
    if selector.is_empty() {
        return None;
    }
    page.lookup(selector)?
        .into_text()
        .filter(|text| !text.is_empty())
}
