//! CMake version detection.

use regex::Regex;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cmake version (\d+\.\d+\.\d+)").expect("valid version pattern"));

/// Extracts the dotted `X.Y.Z` version from `cmake --version` output.
pub fn parse_version(text: &str) -> Option<String> {
    VERSION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|version| version.as_str().to_string())
}
