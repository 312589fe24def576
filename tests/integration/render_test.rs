//! Rendering a gathered model.

use super::fixtures::{extraction_config, mock_cmake};
use cmake_tmlanguage::gatherer::Gatherer;
use cmake_tmlanguage::model::LexicalModel;
use cmake_tmlanguage::render::{render_json, GrammarRenderer};
use serde_json::Value;
use tempfile::tempdir;

fn gathered_model() -> LexicalModel {
    Gatherer::new(mock_cmake(), extraction_config())
        .gather()
        .unwrap()
}

#[test]
fn test_grammar_covers_every_command_and_module() {
    let model = gathered_model();
    let output = GrammarRenderer::new().unwrap().render(&model).unwrap();
    let grammar: Value = serde_json::from_str(&output).unwrap();
    let repository = grammar["repository"].as_object().unwrap();

    for command in model.commands.keys() {
        assert!(
            repository.contains_key(&format!("command-{command}")),
            "missing rule for {command}"
        );
    }
    for module in model.modules.keys() {
        assert!(repository.contains_key(&format!("module-{module}")));
    }

    assert_eq!(
        grammar["repository"]["generator-expressions"]["begin"],
        r"\$<(CONFIG|IF|TARGET_FILE)?"
    );
    assert_eq!(
        grammar["repository"]["command-foreach"]["patterns"][0]["match"],
        r"\b(IN|ITEMS|LISTS|RANGE)\b"
    );
}

#[test]
fn test_rendering_is_reproducible() {
    let renderer = GrammarRenderer::new().unwrap();
    let first = renderer.render(&gathered_model()).unwrap();
    let second = renderer.render(&gathered_model()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_template_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keywords.hbs");
    std::fs::write(
        &path,
        "{{#each commands}}{{@key}}={{regex_alternation this}};{{/each}}",
    )
    .unwrap();

    let renderer = GrammarRenderer::from_template_file(&path).unwrap();
    let output = renderer.render(&gathered_model()).unwrap();
    assert_eq!(
        output,
        "add_library=EXCLUDE_FROM_ALL|MODULE|OBJECT|SHARED|STATIC;cmake_policy=;foreach=IN|ITEMS|LISTS|RANGE;"
    );
}

#[test]
fn test_missing_template_file() {
    let dir = tempdir().unwrap();
    let result = GrammarRenderer::from_template_file(&dir.path().join("absent.hbs"));
    let err = result.err().unwrap();
    assert_eq!(err.category(), "I/O Error");
    assert!(err.to_string().contains("absent.hbs"));
}

#[test]
fn test_json_dump_round_trips_sets() {
    let model = gathered_model();
    let value: Value = serde_json::from_str(&render_json(&model).unwrap()).unwrap();

    assert_eq!(value["version"], "3.28.3");
    assert_eq!(
        value["modules"]["FetchContent"]["functions"],
        serde_json::json!(["FetchContent_Declare", "FetchContent_MakeAvailable"])
    );
    assert_eq!(value["commands"]["cmake_policy"], serde_json::json!([]));
}
