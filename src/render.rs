//! Tag serialization.
//!
//! `<tag a="1">` for descriptors without content, `<tag a="1">text</tag>`
//! otherwise. Empty attribute values are skipped. [`render`] writes values
//! verbatim; callers that cannot guarantee sanitized input use
//! [`render_escaped`].

use std::borrow::Cow;
use std::fmt::Write;

use crate::tags::TagDescriptor;
use crate::utils::html::{escape, escape_attr};

/// Serialize `tags` without escaping. `None` when there is nothing to render.
pub fn render(tags: &[TagDescriptor]) -> Option<String> {
    render_with(tags, false)
}

/// Like [`render`], escaping attribute values and content.
pub fn render_escaped(tags: &[TagDescriptor]) -> Option<String> {
    render_with(tags, true)
}

fn render_with(tags: &[TagDescriptor], escaped: bool) -> Option<String> {
    if tags.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(tags.len() * 48);
    for desc in tags {
        let tag = desc.tag();
        out.push('<');
        out.push_str(tag);

        for (name, value) in desc.attrs.iter().filter(|(_, v)| !v.is_empty()) {
            let value = value.to_string();
            let value = if escaped {
                escape_attr(&value)
            } else {
                Cow::Borrowed(value.as_str())
            };
            write!(out, " {name}=\"{value}\"").ok();
        }
        out.push('>');

        if let Some(content) = &desc.content {
            if escaped {
                out.push_str(&escape(content));
            } else {
                out.push_str(content);
            }
            write!(out, "</{tag}>").ok();
        }
    }

    Some(out)
}
