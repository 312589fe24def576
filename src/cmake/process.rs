//! CMake client backed by a real process.

use super::CMakeClient;
use crate::error::{GrammarError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs the CMake executable once per query.
pub struct ProcessCMakeClient {
    executable: PathBuf,
}

impl ProcessCMakeClient {
    /// Creates a client for the given executable path or name.
    ///
    /// Bare names are resolved through `PATH` when the process is spawned.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Returns the executable this client runs.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.describe())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl CMakeClient for ProcessCMakeClient {
    fn run(&self, args: &[String]) -> Result<String> {
        let command_line = self.command_line(args);
        debug!(command = %command_line, "Running CMake");

        let output = Command::new(&self.executable)
            .args(args)
            .output()
            .map_err(|e| GrammarError::Launch {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(GrammarError::external_tool(
                command_line,
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn describe(&self) -> String {
        self.executable().display().to_string()
    }
}
