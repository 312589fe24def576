//! Runs the built binary against a fake `cmake` script.

#![cfg(unix)]

use serde_json::Value;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const FAKE_CMAKE: &str = r#"#!/bin/sh
case "$1" in
  --version) echo "cmake version 3.29.6" ;;
  --help-variable-list) printf 'CMAKE_<LANG>_COMPILER\nPROJECT_NAME\n' ;;
  --help-property-list) printf 'SOURCES\n<LANG>_STANDARD\n' ;;
  --help-command-list) printf 'if\nadd_library\nendif\n' ;;
  --help-command) echo "$2(<name> STATIC SHARED)" ;;
  --help-manual) echo 'See $<CONFIG:cfgs> and $<BOOL:string>.' ;;
  --help-module) echo ".. command:: $2_Add" ;;
  *) echo "CMake Error: Unknown argument $1" >&2; exit 1 ;;
esac
"#;

const BROKEN_CMAKE: &str = r#"#!/bin/sh
echo "cmake exploded" >&2
exit 2
"#;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Runs the binary; returns (exit code, stdout, stderr).
fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_cmake-tmlanguage"))
        .args(args)
        .env_remove("CMAKE")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_writes_grammar_file() {
    let dir = tempdir().unwrap();
    let cmake = write_script(dir.path(), "cmake", FAKE_CMAKE);
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[extraction]\nlanguages = [\"C\", \"CXX\"]\nmodules = [\"FetchContent\"]\n")
        .unwrap();
    let output = dir.path().join("CMake.tmLanguage.json");

    let (code, _, stderr) = run(&[
        "--cmake",
        cmake.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let grammar: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let repository = &grammar["repository"];
    assert!(grammar["comment"].as_str().unwrap().contains("3.29.6"));
    assert_eq!(
        repository["command-add_library"]["patterns"][0]["match"],
        r"\b(SHARED|STATIC)\b"
    );
    assert!(repository.get("command-if").is_none());
    assert_eq!(
        repository["variables"]["match"],
        r"\b(CMAKE_CXX_COMPILER|CMAKE_C_COMPILER|PROJECT_NAME)\b"
    );
    assert_eq!(
        repository["module-FetchContent"]["begin"],
        r"(?i)\b(FetchContent_Add)\s*(\()"
    );
}

#[test]
fn test_json_format_to_stdout() {
    let dir = tempdir().unwrap();
    let cmake = write_script(dir.path(), "cmake", FAKE_CMAKE);
    let config = dir.path().join("absent.toml");

    let (code, stdout, stderr) = run(&[
        "--cmake",
        cmake.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--format",
        "json",
        "--stdout",
    ]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let model: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(model["version"], "3.29.6");
    assert_eq!(model["generator_expressions"], serde_json::json!(["BOOL", "CONFIG"]));
    assert_eq!(model["properties"].as_array().unwrap().len(), 16);
    assert_eq!(
        model["modules"]["ExternalProject"]["functions"],
        serde_json::json!(["ExternalProject_Add"])
    );
}

#[test]
fn test_cmake_failure_writes_nothing() {
    let dir = tempdir().unwrap();
    let cmake = write_script(dir.path(), "cmake", BROKEN_CMAKE);
    let config = dir.path().join("absent.toml");
    let output = dir.path().join("out.json");

    let (code, _, stderr) = run(&[
        "--cmake",
        cmake.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);

    assert_eq!(code, 1);
    assert!(stderr.contains("cmake exploded"), "stderr: {stderr}");
    assert!(stderr.contains("--version"));
    assert!(!output.exists());
}

#[test]
fn test_missing_executable() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("absent.toml");

    let (code, _, stderr) = run(&[
        "--cmake",
        "/nonexistent/cmake",
        "--config",
        config.to_str().unwrap(),
        "--stdout",
    ]);

    assert_eq!(code, 1);
    assert!(stderr.contains("/nonexistent/cmake"));
}
