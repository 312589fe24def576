//! Command signature parsing.
//!
//! CMake documents each command form as `name(<args>...)`, possibly wrapped
//! over several lines. Keywords are the uppercase words inside the parens.

use super::{collapse_whitespace, extract_tokens};
use crate::error::{GrammarError, Result};
use regex::Regex;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Builds the signature pattern for one command.
fn signature_pattern(command: &str) -> Result<Regex> {
    let pattern = format!(r"(?s)\b{}\b\s*\((.*?)\)", regex::escape(command));
    Regex::new(&pattern)
        .map_err(|e| GrammarError::Pattern(format!("signature pattern for '{command}': {e}")))
}

/// Returns the argument span of every `command(...)` signature in `help_text`.
///
/// Spans come back whitespace-normalized, in document order.
pub fn find_signatures(command: &str, help_text: &str) -> Result<Vec<String>> {
    let pattern = signature_pattern(command)?;
    let text = collapse_whitespace(help_text);

    Ok(pattern
        .captures_iter(&text)
        .filter_map(|caps| caps.get(1))
        .map(|span| collapse_whitespace(span.as_str()))
        .collect())
}

/// Collects the keywords of every signature of `command`.
///
/// A command without any matching signature is not an error: it is logged
/// and yields an empty set.
pub fn parse_signatures(
    command: &str,
    help_text: &str,
    stoplist: &BTreeSet<String>,
) -> Result<BTreeSet<String>> {
    let signatures = find_signatures(command, help_text)?;
    if signatures.is_empty() {
        warn!(command, "No signature found for command");
        return Ok(BTreeSet::new());
    }

    let mut keywords = BTreeSet::new();
    for signature in &signatures {
        debug!(command, signature = %signature, "Parsing signature");
        keywords.extend(extract_tokens(signature, stoplist));
    }
    Ok(keywords)
}
