//! Error types for cmake-tmlanguage.
//!
//! Defines the main error enum used throughout the generator. Every variant
//! is fatal: a missing command signature is not an error and never reaches
//! this type.

use thiserror::Error;

/// Main error type for grammar generation.
#[derive(Error, Debug)]
pub enum GrammarError {
    /// The CMake executable exited with a non-zero status.
    #[error("Command `{command}` failed with error: {stderr}")]
    ExternalTool { command: String, stderr: String },

    /// The CMake executable could not be started at all (missing, not executable, etc.)
    #[error("Could not run `{command}`: {reason}")]
    Launch { command: String, reason: String },

    /// The version output did not contain a `cmake version X.Y.Z` line.
    #[error("Could not determine CMake version from `{command}` output: {output}")]
    MissingVersion { command: String, output: String },

    /// A curated module's help text declared no `.. command::` directives.
    #[error("No functions found for module {module} in `{command}` output")]
    EmptyModule { module: String, command: String },

    /// A dynamically built extraction pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Configuration errors (invalid config file, unknown language, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template registration or rendering errors.
    #[error("Template error: {0}")]
    Template(String),

    /// Filesystem errors while reading templates or writing output.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GrammarError {
    /// Creates an external tool failure for the given command line.
    pub fn external_tool(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::ExternalTool {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a template error with the given message.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::ExternalTool { .. } | Self::Launch { .. } => "CMake Error",
            Self::MissingVersion { .. } => "Version Error",
            Self::EmptyModule { .. } => "Module Error",
            Self::Pattern(_) => "Pattern Error",
            Self::Config(_) => "Configuration Error",
            Self::Template(_) => "Template Error",
            Self::Io(_) => "I/O Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using GrammarError.
pub type Result<T> = std::result::Result<T, GrammarError>;
