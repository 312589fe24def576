//! Extraction rules for CMake help text.
//!
//! Each submodule owns one named pattern rule and works on plain strings, so
//! every rule can be tested against literal fixtures without running CMake.

mod genex;
mod module;
mod placeholder;
mod signature;
mod tokens;
mod version;

pub use genex::scan_generator_expressions;
pub use module::{parse_module_functions, parse_module_keywords};
pub use placeholder::{expand, expand_entry};
pub use signature::{find_signatures, parse_signatures};
pub use tokens::extract_tokens;
pub use version::parse_version;

/// Collapses every run of whitespace (including newlines) into a single space.
///
/// Help text wraps long signatures across lines; after collapsing, a
/// signature reads the same whether it was wrapped or not.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
