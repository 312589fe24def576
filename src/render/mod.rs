//! Grammar rendering.
//!
//! Feeds a [`LexicalModel`] into a Handlebars template. The built-in template
//! produces a TextMate grammar (JSON); a custom template can replace it.

use crate::error::{GrammarError, Result};
use crate::model::LexicalModel;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};
use serde_json::Value;
use std::path::Path;

const TEMPLATE_NAME: &str = "grammar";

/// The built-in TextMate grammar template.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/cmake.tmLanguage.json.hbs");

/// Joins items, sorted by their raw names, into a regex-escaped `a|b|c`
/// alternation.
pub fn escape_list_for_regex<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<S> = items.into_iter().collect();
    names.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
    names
        .iter()
        .map(|name| regex::escape(name.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Escapes text for use inside a JSON string literal.
fn json_escape(text: &str) -> String {
    // Displaying a string value cannot fail and always yields `"..."`.
    let quoted = Value::from(text).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Renders a grammar document from a lexical model.
pub struct GrammarRenderer {
    handlebars: Handlebars<'static>,
}

impl GrammarRenderer {
    /// Creates a renderer using the built-in TextMate template.
    pub fn new() -> Result<Self> {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Creates a renderer from template source.
    pub fn with_template(source: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(json_escape);
        handlebars.register_helper("regex_alternation", Box::new(regex_alternation_helper));
        handlebars
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|e| GrammarError::template(e.to_string()))?;

        Ok(Self { handlebars })
    }

    /// Creates a renderer from a template file.
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            GrammarError::io(format!("Failed to read template {}: {e}", path.display()))
        })?;
        Self::with_template(&source)
    }

    /// Renders the grammar for `model`.
    pub fn render(&self, model: &LexicalModel) -> Result<String> {
        self.handlebars
            .render(TEMPLATE_NAME, model)
            .map_err(|e| GrammarError::template(e.to_string()))
    }
}

/// Dumps the model itself as pretty-printed JSON.
pub fn render_json(model: &LexicalModel) -> Result<String> {
    serde_json::to_string_pretty(model)
        .map_err(|e| GrammarError::internal(format!("Failed to serialize model: {e}")))
}

// Handlebars helpers

/// `{{regex_alternation list}}`: a string or array of strings as an escaped
/// alternation, ready to sit inside a JSON string.
fn regex_alternation_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("regex_alternation", 0))?
        .value();

    let items: Vec<&str> = match value {
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        Value::String(item) => vec![item.as_str()],
        _ => {
            return Err(RenderErrorReason::InvalidParamType("string or array of strings").into())
        }
    };

    out.write(&json_escape(&escape_list_for_regex(items)))?;
    Ok(())
}
