//! Access to the CMake executable.
//!
//! Provides a narrow trait-based interface (arguments in, stdout or failure
//! out) so the extraction pipeline can run against an in-memory client.

mod mock;
mod process;

pub use mock::{FailingCMakeClient, MockCMakeClient};
pub use process::ProcessCMakeClient;

use crate::error::Result;

/// The help queries the generator issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpQuery<'a> {
    /// `--help-variable-list`
    VariableList,
    /// `--help-command-list`
    CommandList,
    /// `--help-property-list`
    PropertyList,
    /// `--help-command <name>`
    Command(&'a str),
    /// `--help-manual <name>`
    Manual(&'a str),
    /// `--help-module <name>`
    Module(&'a str),
    /// `--version`
    Version,
}

impl HelpQuery<'_> {
    /// Returns the command-line arguments for this query.
    pub fn args(&self) -> Vec<String> {
        let (flag, operand) = match *self {
            Self::VariableList => ("--help-variable-list", None),
            Self::CommandList => ("--help-command-list", None),
            Self::PropertyList => ("--help-property-list", None),
            Self::Command(name) => ("--help-command", Some(name)),
            Self::Manual(name) => ("--help-manual", Some(name)),
            Self::Module(name) => ("--help-module", Some(name)),
            Self::Version => ("--version", None),
        };

        std::iter::once(flag)
            .chain(operand)
            .map(String::from)
            .collect()
    }
}

/// Trait defining the interface for CMake clients.
///
/// Every call blocks until the invocation finishes. Implementations return
/// the captured standard output, or an error carrying the diagnostic text.
pub trait CMakeClient {
    /// Runs CMake with the given arguments.
    fn run(&self, args: &[String]) -> Result<String>;

    /// Human-readable name of the executable, for log messages.
    fn describe(&self) -> String;

    /// Runs a typed help query.
    fn query(&self, query: HelpQuery<'_>) -> Result<String> {
        self.run(&query.args())
    }
}
