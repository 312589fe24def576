//! Configuration management for cmake-tmlanguage.
//!
//! Handles loading configuration from TOML files. Every list the extraction
//! pipeline filters by (stoplist, excluded commands, modules, languages) lives
//! here so it can be overridden without touching the code.

use crate::error::{GrammarError, Result};
use crate::language::LanguageTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Uppercase words that show up in help text but are not keywords.
pub const DEFAULT_STOPLIST: &[&str] = &[
    "VS", "CXX", "IDE", "NOTFOUND", "NO_", "DFOO", "DBAR", "NEW", "GNU",
];

/// Commands the grammar handles with dedicated rules.
///
/// Block openers (`if`, `while`, `function`, ...) get their own patterns and
/// the argument-less control commands have nothing to extract.
pub const DEFAULT_EXCLUDED_COMMANDS: &[&str] = &[
    "if",
    "elseif",
    "while",
    "macro",
    "function",
    "break",
    "continue",
    "return",
    "else",
    "endif",
    "endwhile",
    "endforeach",
    "endmacro",
    "endfunction",
];

/// Modules whose commands are highlighted.
pub const DEFAULT_MODULES: &[&str] = &["CMakePackageConfigHelpers", "ExternalProject", "FetchContent"];

/// Placeholder CMake uses for per-language entries.
pub const DEFAULT_PLACEHOLDER: &str = "<LANG>";

/// Manual section listing the generator expressions.
pub const DEFAULT_GENEX_MANUAL: &str = "cmake-generator-expressions";

/// Default CMake executable, resolved through `PATH`.
pub const DEFAULT_EXECUTABLE: &str = "cmake";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "CMake.tmLanguage.json";

fn owned_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// CMake executable settings.
    #[serde(default)]
    pub cmake: CMakeConfig,

    /// Extraction rules.
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// CMake executable settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CMakeConfig {
    /// Path or name of the CMake executable.
    pub executable: Option<PathBuf>,
}

/// Lists and names the extraction pipeline works from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Placeholder substituted by each language name, e.g. `<LANG>`.
    pub placeholder: String,

    /// Languages placeholder entries expand to.
    pub languages: Vec<LanguageTag>,

    /// Uppercase words never reported as keywords.
    pub stoplist: BTreeSet<String>,

    /// Commands left out of the command list.
    pub excluded_commands: BTreeSet<String>,

    /// Modules whose declared commands and keywords are gathered.
    pub modules: Vec<String>,

    /// Manual section scanned for generator expressions.
    pub generator_expression_manual: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            languages: LanguageTag::ALL.to_vec(),
            stoplist: owned_set(DEFAULT_STOPLIST),
            excluded_commands: owned_set(DEFAULT_EXCLUDED_COMMANDS),
            modules: DEFAULT_MODULES.iter().map(|m| m.to_string()).collect(),
            generator_expression_manual: DEFAULT_GENEX_MANUAL.to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Checks the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if !(self.placeholder.starts_with('<') && self.placeholder.ends_with('>')) {
            return Err(GrammarError::config(format!(
                "Placeholder '{}' must be an angle-bracketed segment such as <LANG>",
                self.placeholder
            )));
        }
        if self.languages.is_empty() {
            return Err(GrammarError::config("At least one language is required"));
        }
        if self.generator_expression_manual.trim().is_empty() {
            return Err(GrammarError::config(
                "Generator expression manual name must not be empty",
            ));
        }
        Ok(())
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// File the grammar is written to.
    pub path: Option<PathBuf>,

    /// Custom Handlebars template replacing the built-in grammar template.
    pub template: Option<PathBuf>,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cmake-tmlanguage")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GrammarError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            GrammarError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.extraction.validate()?;
        Ok(config)
    }

    /// Resolves the CMake executable.
    ///
    /// An explicit value (command line or `CMAKE` environment variable) wins
    /// over the config file, which wins over plain `cmake`.
    pub fn resolve_executable(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.cmake.executable.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXECUTABLE))
    }

    /// Resolves the output path, preferring an explicit value.
    pub fn resolve_output(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.output.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Resolves the template path, preferring an explicit value.
    pub fn resolve_template(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.output.template.clone())
    }
}
