//! Expansion of language-parametrized entries.

use crate::language::LanguageTag;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::debug;

/// An angle-bracketed segment such as `<LANG>` or `<CONFIG>`.
static BRACKET_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid bracket segment pattern"));

/// Expands a single entry.
///
/// - No bracketed segment: the entry is returned unchanged.
/// - Only `placeholder` segments: one entry per tag, with every occurrence
///   substituted by the tag's name.
/// - Any other bracketed segment: nothing is returned, since there is no
///   rule to expand it.
pub fn expand_entry(entry: &str, placeholder: &str, tags: &[LanguageTag]) -> Vec<String> {
    let mut segments = BRACKET_SEGMENT_RE.find_iter(entry).peekable();
    if segments.peek().is_none() {
        return vec![entry.to_string()];
    }

    if segments.any(|segment| segment.as_str() != placeholder) {
        debug!(entry, "Skipping entry with unsupported placeholder");
        return Vec::new();
    }

    tags.iter()
        .map(|tag| entry.replace(placeholder, tag.as_str()))
        .collect()
}

/// Expands every entry, deduplicating across all expansions.
pub fn expand<I, S>(entries: I, placeholder: &str, tags: &[LanguageTag]) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .flat_map(|entry| expand_entry(entry.as_ref(), placeholder, tags))
        .collect()
}
