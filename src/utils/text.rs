//! Plain-text truncation for descriptions.
//!
//! | Mode          | Cut position                                    |
//! |---------------|-------------------------------------------------|
//! | `word`        | last whitespace at or before the limit          |
//! | `punctuation` | after the last `. , ; : ! ?` within the limit   |
//! | `sentence`    | after the last `. ! ?` within the limit         |
//! | `block`       | exactly at the limit                            |
//!
//! Limits count `char`s, not bytes. Boundary modes fall back to `word`,
//! then to a hard cut, when the text has no usable boundary.
//!
//! Entities are decoded for counting only. The result is re-encoded, so
//! output written into an attribute by the raw renderer stays inside it.

use serde::{Deserialize, Serialize};

use super::html::{escape, strip_tags, unescape};

const PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];
const SENTENCE_END: &[char] = &['.', '!', '?'];

/// Where a truncated description may be cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateMode {
    /// Cut at a word boundary (default).
    #[default]
    Word,
    /// Cut after sentence or clause punctuation.
    Punctuation,
    /// Cut after a sentence terminator.
    Sentence,
    /// Hard cut at the character limit.
    Block,
}

/// Reduce `text` to plain text and truncate it to `max_length` characters.
///
/// Markup is stripped, entities decoded and whitespace collapsed first.
/// The cut text is HTML-escaped again before it is returned.
/// A `max_length` of 0 disables truncation.
pub fn truncate(text: &str, max_length: usize, mode: TruncateMode) -> String {
    let plain = normalize(text);
    let cut = cut_to(&plain, max_length, mode);
    escape(&cut).into_owned()
}

fn cut_to(plain: &str, max_length: usize, mode: TruncateMode) -> String {
    if max_length == 0 || plain.chars().count() <= max_length {
        return plain.to_string();
    }

    let head = char_prefix(plain, max_length);
    match mode {
        TruncateMode::Block => head.to_string(),
        TruncateMode::Word => cut_at_word(plain, head),
        TruncateMode::Punctuation => {
            cut_after(head, PUNCTUATION).unwrap_or_else(|| cut_at_word(plain, head))
        }
        TruncateMode::Sentence => {
            cut_after(head, SENTENCE_END).unwrap_or_else(|| cut_at_word(plain, head))
        }
    }
}

/// Strip tags, decode entities and collapse whitespace runs.
fn normalize(text: &str) -> String {
    let stripped = strip_tags(text);
    let decoded = unescape(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `n` chars of `s` (borrowed).
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn cut_at_word(full: &str, head: &str) -> String {
    // Limit falls exactly on a boundary: keep the whole head
    let next = full[head.len()..].chars().next();
    if next.is_some_and(char::is_whitespace) {
        return head.trim_end().to_string();
    }

    match head.rfind(char::is_whitespace) {
        Some(idx) if !head[..idx].trim_end().is_empty() => head[..idx].trim_end().to_string(),
        _ => head.to_string(),
    }
}

fn cut_after(head: &str, marks: &[char]) -> Option<String> {
    let idx = head.rfind(marks)?;
    // Marks are ASCII, so `idx + 1` is a char boundary
    let cut = head[..idx + 1].trim_end();
    (!cut.is_empty()).then(|| cut.to_string())
}
