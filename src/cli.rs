//! Command-line argument parsing for cmake-tmlanguage.

use clap::Parser;
use std::path::{Path, PathBuf};

/// Output format for the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// TextMate grammar (or whatever the template produces).
    #[default]
    Grammar,
    /// The gathered lexical model as JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grammar" => Ok(Self::Grammar),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Invalid output format: {s}. Expected: grammar or json"
            )),
        }
    }
}

/// Generate a TextMate grammar for CMake from CMake's own help output.
#[derive(Parser, Debug)]
#[command(name = "cmake-tmlanguage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the CMake executable
    #[arg(long, value_name = "PATH", env = "CMAKE")]
    pub cmake: Option<PathBuf>,

    /// Output file for the generated grammar
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the result to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Handlebars template replacing the built-in grammar template
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "grammar")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Returns the explicitly requested CMake executable, if any.
    pub fn cmake_path(&self) -> Option<&Path> {
        self.cmake.as_deref()
    }

    /// Returns the default log level for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
