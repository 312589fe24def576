//! In-memory CMake clients for testing.

use super::CMakeClient;
use crate::error::{GrammarError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// A mock CMake client that returns predefined output per argument line.
///
/// Queries without a registered response fail the way a non-zero exit would.
#[derive(Debug, Default)]
pub struct MockCMakeClient {
    responses: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl MockCMakeClient {
    /// Creates a mock client with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the output for an argument line such as `--help-command add_library`.
    pub fn with_response(mut self, args: &str, output: impl Into<String>) -> Self {
        self.responses.insert(args.to_string(), output.into());
        self
    }

    /// Returns every argument line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CMakeClient for MockCMakeClient {
    fn run(&self, args: &[String]) -> Result<String> {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());

        self.responses
            .get(&key)
            .map(|output| output.trim().to_string())
            .ok_or_else(|| {
                GrammarError::external_tool(
                    format!("mock-cmake {key}"),
                    format!("no response registered for '{key}'"),
                )
            })
    }

    fn describe(&self) -> String {
        "mock-cmake".to_string()
    }
}

/// A CMake client whose every invocation fails.
#[derive(Debug, Clone)]
pub struct FailingCMakeClient {
    stderr: String,
}

impl FailingCMakeClient {
    /// Creates a client failing with the given diagnostic text.
    pub fn new(stderr: impl Into<String>) -> Self {
        Self {
            stderr: stderr.into(),
        }
    }
}

impl CMakeClient for FailingCMakeClient {
    fn run(&self, args: &[String]) -> Result<String> {
        Err(GrammarError::external_tool(
            format!("failing-cmake {}", args.join(" ")),
            self.stderr.clone(),
        ))
    }

    fn describe(&self) -> String {
        "failing-cmake".to_string()
    }
}
