//! Host services injected into the resolver.
//!
//! Everything the resolver needs beyond the current page goes through
//! [`HostServices`]: language enumeration, page lookup, request URL
//! segments and text truncation. Defaults describe a single-language host
//! without URL segments.

use crate::page::{Language, PageLike};
use crate::utils::text::{self, TruncateMode};

pub trait HostServices {
    type Page: PageLike;

    /// All languages, in the host's enumeration order.
    fn languages(&self) -> Vec<Language> {
        Vec::new()
    }

    /// Look up a page by id (used for the fallback image page).
    fn find_page(&self, _id: u64) -> Option<Self::Page> {
        None
    }

    /// URL segments of the current request, e.g. `page2` or `tag/rust`.
    fn url_segment_str(&self) -> String {
        String::new()
    }

    /// Whether language-specific page names/URLs are enabled.
    fn language_page_names(&self) -> bool {
        false
    }

    /// Whether the current language's template has `field`.
    fn language_template_has_field(&self, _field: &str) -> bool {
        false
    }

    /// Truncate a description. Defaults to [`text::truncate`].
    fn truncate(&self, text: &str, max_length: usize, mode: TruncateMode) -> String {
        text::truncate(text, max_length, mode)
    }
}
