//! Tag descriptors and the collectors that accumulate them.
//!
//! - [`TagCollector`] - append-only, used by the render pipeline
//! - [`KeyedTagCollector`] - set-or-replace by key, first-write position

mod attrs;
mod keyed;

pub use attrs::{AttrValue, Attrs};
pub use keyed::KeyedTagCollector;

use thiserror::Error;

/// Errors raised while collecting tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    #[error("tag name must not be empty")]
    EmptyTagName,
}

// =============================================================================
// TagDescriptor
// =============================================================================

/// One emittable element: `<tag attrs>` or `<tag attrs>content</tag>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDescriptor {
    tag: String,
    pub attrs: Attrs,
    pub content: Option<String>,
}

impl TagDescriptor {
    /// Create a descriptor. The tag name must be non-empty.
    pub fn new(
        tag: impl Into<String>,
        attrs: Attrs,
        content: Option<String>,
    ) -> Result<Self, MetaError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(MetaError::EmptyTagName);
        }
        Ok(Self {
            tag,
            attrs,
            content,
        })
    }

    /// Descriptor for a tag name known at compile time.
    pub(crate) fn known(tag: &'static str, attrs: Attrs, content: Option<String>) -> Self {
        debug_assert!(!tag.is_empty());
        Self {
            tag: tag.to_string(),
            attrs,
            content,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Shorthand for `attrs.get(name)` as text.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }
}

// =============================================================================
// TagCollector
// =============================================================================

/// Append-only, per-render list of tag descriptors.
///
/// No deduplication: adding the same tag twice emits it twice.
#[derive(Debug, Clone, Default)]
pub struct TagCollector {
    tags: Vec<TagDescriptor>,
}

impl TagCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag and return everything collected so far.
    pub fn add_tag(
        &mut self,
        tag: impl Into<String>,
        attrs: impl Into<Attrs>,
        content: Option<String>,
    ) -> Result<&[TagDescriptor], MetaError> {
        let desc = TagDescriptor::new(tag, attrs.into(), content)?;
        self.tags.push(desc);
        Ok(&self.tags)
    }

    /// Append an already validated descriptor.
    pub fn push(&mut self, desc: TagDescriptor) {
        self.tags.push(desc);
    }

    /// Append a `<meta>` built from `attrs`.
    pub(crate) fn meta(&mut self, attrs: impl Into<Attrs>) {
        self.push(TagDescriptor::known("meta", attrs.into(), None));
    }

    /// Append a `<link>` built from `attrs`.
    pub(crate) fn link(&mut self, attrs: impl Into<Attrs>) {
        self.push(TagDescriptor::known("link", attrs.into(), None));
    }

    pub fn tags(&self) -> &[TagDescriptor] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn into_tags(self) -> Vec<TagDescriptor> {
        self.tags
    }
}
