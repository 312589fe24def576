//! Module help text parsing.

use super::{collapse_whitespace, extract_tokens};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// reStructuredText `.. command:: name` directive.
static COMMAND_DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.\. command::\s+([A-Za-z_]+)").expect("valid command directive pattern")
});

/// Collects the commands a module declares with `.. command::` directives.
///
/// Returns `None` when there are no directives. Modules are picked from a
/// curated list, so callers treat that as fatal: the module name or CMake's
/// documentation format is not what we expect.
pub fn parse_module_functions(help_text: &str) -> Option<BTreeSet<String>> {
    let text = collapse_whitespace(help_text);
    let functions: BTreeSet<String> = COMMAND_DIRECTIVE_RE
        .captures_iter(&text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect();

    (!functions.is_empty()).then_some(functions)
}

/// Collects every uppercase word in a module's help text.
pub fn parse_module_keywords(help_text: &str, stoplist: &BTreeSet<String>) -> BTreeSet<String> {
    extract_tokens(&collapse_whitespace(help_text), stoplist)
}
