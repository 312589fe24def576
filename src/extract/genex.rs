//! Generator expression names.

use super::collapse_whitespace;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// `$<NAME:` where NAME is uppercase letters and underscores.
static GENEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$<([A-Z_]+):").expect("valid generator expression pattern"));

/// Collects every generator expression name that takes arguments.
///
/// No stoplist is applied; the `$<` and `:` delimiters already rule out
/// incidental uppercase prose.
pub fn scan_generator_expressions(help_text: &str) -> BTreeSet<String> {
    let text = collapse_whitespace(help_text);
    GENEX_RE
        .captures_iter(&text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}
