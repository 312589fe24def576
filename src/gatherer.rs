//! Gathers every lexical category from CMake's help output.
//!
//! Each category costs one (or, for commands, one per command) blocking
//! CMake invocation. Invocations run strictly in sequence, and the first
//! failure aborts the whole run.

use crate::cmake::{CMakeClient, HelpQuery};
use crate::config::ExtractionConfig;
use crate::error::{GrammarError, Result};
use crate::extract::{
    expand, parse_module_functions, parse_module_keywords, parse_signatures,
    parse_version, scan_generator_expressions,
};
use crate::model::{Category, LexicalModel, ModuleEntry};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Splits listing output into trimmed, non-blank lines.
fn listing_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Orchestrates the extraction of a [`LexicalModel`].
pub struct Gatherer<C> {
    client: C,
    config: ExtractionConfig,
}

impl<C: CMakeClient> Gatherer<C> {
    /// Creates a gatherer over the given client and extraction rules.
    pub fn new(client: C, config: ExtractionConfig) -> Self {
        Self { client, config }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the full command line a query runs, for error messages.
    fn command_line(&self, query: HelpQuery<'_>) -> String {
        std::iter::once(self.client.describe())
            .chain(query.args())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the `X.Y.Z` version of the CMake being queried.
    pub fn version(&self) -> Result<String> {
        let output = self.client.query(HelpQuery::Version)?;
        parse_version(&output).ok_or_else(|| GrammarError::MissingVersion {
            command: self.command_line(HelpQuery::Version),
            output,
        })
    }

    /// Gathers variable names, expanding `<LANG>` entries.
    pub fn gather_variables(&self) -> Result<BTreeSet<String>> {
        self.gather_listing(HelpQuery::VariableList)
    }

    /// Gathers property names, expanding `<LANG>` entries.
    pub fn gather_properties(&self) -> Result<BTreeSet<String>> {
        self.gather_listing(HelpQuery::PropertyList)
    }

    fn gather_listing(&self, query: HelpQuery<'_>) -> Result<BTreeSet<String>> {
        let output = self.client.query(query)?;
        Ok(expand(
            listing_lines(&output),
            &self.config.placeholder,
            &self.config.languages,
        ))
    }

    /// Gathers command names, minus those the grammar models separately.
    pub fn gather_commands(&self) -> Result<BTreeSet<String>> {
        let output = self.client.query(HelpQuery::CommandList)?;
        Ok(listing_lines(&output)
            .filter(|command| !self.config.excluded_commands.contains(*command))
            .map(String::from)
            .collect())
    }

    /// Gathers the signature keywords of one command.
    pub fn gather_command_keywords(&self, command: &str) -> Result<BTreeSet<String>> {
        let help = self.client.query(HelpQuery::Command(command))?;
        parse_signatures(command, &help, &self.config.stoplist)
    }

    /// Gathers every command together with its keywords.
    ///
    /// Commands without a matching signature are kept with an empty set.
    pub fn gather_command_map(&self) -> Result<BTreeMap<String, BTreeSet<String>>> {
        let mut commands = BTreeMap::new();
        for command in self.gather_commands()? {
            let keywords = self.gather_command_keywords(&command)?;
            debug!(command = %command, keywords = keywords.len(), "Gathered command");
            commands.insert(command, keywords);
        }
        Ok(commands)
    }

    /// Gathers the names of generator expressions that take arguments.
    pub fn gather_generator_expressions(&self) -> Result<BTreeSet<String>> {
        let manual = &self.config.generator_expression_manual;
        let help = self.client.query(HelpQuery::Manual(manual))?;
        Ok(scan_generator_expressions(&help))
    }

    /// Gathers the declared commands and keywords of one module.
    pub fn gather_module(&self, module: &str) -> Result<ModuleEntry> {
        let query = HelpQuery::Module(module);
        let help = self.client.query(query)?;
        let functions =
            parse_module_functions(&help).ok_or_else(|| GrammarError::EmptyModule {
                module: module.to_string(),
                command: self.command_line(query),
            })?;

        Ok(ModuleEntry {
            name: module.to_string(),
            functions,
            keywords: parse_module_keywords(&help, &self.config.stoplist),
        })
    }

    /// Gathers every configured module.
    pub fn gather_modules(&self) -> Result<BTreeMap<String, ModuleEntry>> {
        self.config
            .modules
            .iter()
            .map(|module| Ok((module.clone(), self.gather_module(module)?)))
            .collect()
    }

    /// Gathers the complete lexical model.
    pub fn gather(&self) -> Result<LexicalModel> {
        info!("Querying {}", self.client.describe());

        let version = self.version()?;
        info!("CMake version {version}");

        let model = LexicalModel {
            version,
            variables: self.gather_variables()?,
            commands: self.gather_command_map()?,
            generator_expressions: self.gather_generator_expressions()?,
            properties: self.gather_properties()?,
            modules: self.gather_modules()?,
        };

        for category in Category::ALL {
            info!("Gathered {} {}", model.count(category), category);
        }
        Ok(model)
    }
}
