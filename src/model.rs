//! The lexical model handed to the grammar renderer.
//!
//! All collections are ordered (`BTreeSet`/`BTreeMap`) so the rendered
//! grammar is byte-for-byte reproducible across runs.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One kind of lexical entity harvested from CMake's help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Variable,
    Command,
    GeneratorExpression,
    Property,
    ModuleFunction,
    ModuleKeyword,
}

impl Category {
    /// Every category, in gathering order.
    pub const ALL: [Category; 6] = [
        Self::Variable,
        Self::Command,
        Self::GeneratorExpression,
        Self::Property,
        Self::ModuleFunction,
        Self::ModuleKeyword,
    ];

    /// Returns a plural, human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Variable => "variables",
            Self::Command => "commands",
            Self::GeneratorExpression => "generator expressions",
            Self::Property => "properties",
            Self::ModuleFunction => "module functions",
            Self::ModuleKeyword => "module keywords",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commands and keywords discovered in one CMake module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleEntry {
    /// Module name, e.g. `FetchContent`.
    pub name: String,
    /// Commands declared with `.. command::`.
    pub functions: BTreeSet<String>,
    /// Uppercase words found anywhere in the module help.
    pub keywords: BTreeSet<String>,
}

/// Everything the generator learned from one CMake installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LexicalModel {
    /// CMake version the help text came from, e.g. `3.28.3`.
    pub version: String,
    /// Variable names with `<LANG>` entries expanded.
    pub variables: BTreeSet<String>,
    /// Command name to the keywords of its signatures; empty when none matched.
    pub commands: BTreeMap<String, BTreeSet<String>>,
    /// Generator expression names that take arguments.
    pub generator_expressions: BTreeSet<String>,
    /// Property names with `<LANG>` entries expanded.
    pub properties: BTreeSet<String>,
    /// Module name to its entry.
    pub modules: BTreeMap<String, ModuleEntry>,
}

impl LexicalModel {
    /// Returns the number of entries gathered for a category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Variable => self.variables.len(),
            Category::Command => self.commands.len(),
            Category::GeneratorExpression => self.generator_expressions.len(),
            Category::Property => self.properties.len(),
            Category::ModuleFunction => self.modules.values().map(|m| m.functions.len()).sum(),
            Category::ModuleKeyword => self.modules.values().map(|m| m.keywords.len()).sum(),
        }
    }

    /// Returns commands whose help yielded no keywords.
    pub fn commands_without_keywords(&self) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .filter(|(_, keywords)| keywords.is_empty())
            .map(|(name, _)| name.as_str())
    }
}
