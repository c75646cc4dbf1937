//! Set-or-replace tag collection keyed by caller-chosen names.
//!
//! Overwriting a key keeps the position of its first write. Removing a key
//! frees its slot; setting it again appends at the end.

use super::{Attrs, MetaError, TagDescriptor};

#[derive(Debug, Clone, Default)]
pub struct KeyedTagCollector {
    entries: Vec<(String, TagDescriptor)>,
}

impl KeyedTagCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag stored under `key`, replacing any previous one in place.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        tag: impl Into<String>,
        attrs: impl Into<Attrs>,
        content: Option<String>,
    ) -> Result<(), MetaError> {
        let key = key.into();
        let desc = TagDescriptor::new(tag, attrs.into(), content)?;

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = desc,
            None => self.entries.push((key, desc)),
        }
        Ok(())
    }

    /// Remove and return the tag stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<TagDescriptor> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&TagDescriptor> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptors in render order.
    pub fn into_tags(self) -> Vec<TagDescriptor> {
        self.entries.into_iter().map(|(_, d)| d).collect()
    }
}
