//! Languages enumerated by the host.

use rustc_hash::FxHashMap;

/// A host language and its template fields.
///
/// The hreflang code lives in a configurable field
/// (`hreflang_code_field`), so fields stay an open map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    fields: FxHashMap<String, String>,
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FxHashMap::default(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Non-empty value of `field`.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
