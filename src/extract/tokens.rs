//! Uppercase keyword tokenizer.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// An uppercase letter followed by one or more uppercase letters or underscores.
static UPPER_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z_]+\b").expect("valid uppercase word pattern"));

/// Extracts all uppercase words from `text`, minus anything in `stoplist`.
///
/// Returns an empty set when nothing qualifies.
pub fn extract_tokens(text: &str, stoplist: &BTreeSet<String>) -> BTreeSet<String> {
    UPPER_WORD_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| !stoplist.contains(*word))
        .map(String::from)
        .collect()
}
