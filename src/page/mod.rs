//! Page-side capabilities consumed from the host.
//!
//! The host CMS owns pages, their fields and their URLs. This crate only
//! sees them through [`PageLike`]; selectors are opaque strings the host
//! interprets.

mod language;

pub use language::Language;

use crate::image::ImageLike;

/// A value returned by a field lookup.
///
/// Pages expose text, numbers, single images or image collections. Anything
/// else is the host's business and should map to `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<I> {
    Text(String),
    Number(i64),
    Image(I),
    Images(Vec<I>),
}

impl<I> FieldValue<I> {
    /// Text form of scalar values. Images have none.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(n) => Some(n.to_string()),
            Self::Image(_) | Self::Images(_) => None,
        }
    }

    /// The image of a single-image value, or the first of a collection.
    ///
    /// Scalars and empty collections yield `None`.
    pub fn into_image(self) -> Option<I> {
        match self {
            Self::Image(img) => Some(img),
            Self::Images(imgs) => imgs.into_iter().next(),
            Self::Text(_) | Self::Number(_) => None,
        }
    }
}

impl<I> From<&str> for FieldValue<I> {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<I> From<String> for FieldValue<I> {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Template flags that shape page URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlPolicy {
    /// Template accepts URL segments after the page path.
    pub url_segments: bool,
    /// Append `/` when URL segments are present.
    pub slash_url_segments: bool,
    /// Append `/` to page URLs without segments.
    pub slash_urls: bool,
}

/// A page as seen by the resolver.
pub trait PageLike: Sized {
    type Image: ImageLike;

    /// Look up a field by host selector. `None` when absent.
    fn lookup(&self, selector: &str) -> Option<FieldValue<Self::Image>>;

    /// Default-language path, e.g. `/about/`.
    fn url(&self) -> String;

    /// Path of this page in `language`.
    fn localized_url(&self, language: &Language) -> String;

    /// Ancestors, root first (the closest parent is last).
    fn parents(&self) -> Vec<Self>;

    /// Whether the page is published and viewable in `language`.
    fn is_viewable_by(&self, language: &Language) -> bool;

    fn url_policy(&self) -> UrlPolicy;
}
