// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

const HELLO: &str = r#"
title = "Say hello"
starter_code = "// print a greeting\n"

[[expectations]]
name = "greets"
expected_substring = "Hello"

[[expectations]]
name = "runs"
expected_substring = ""
"#;

#[test]
fn parses_exercise() {
    let exercise = Exercise::from_toml_str(HELLO).unwrap();
    assert_eq!(exercise.title, "Say hello");
    assert_eq!(exercise.starter_code, "// print a greeting\n");
    assert_eq!(
        exercise.expectations,
        vec![ExpectationRule::new("greets", "Hello"), ExpectationRule::new("runs", "")]
    );
    assert_eq!(exercise.description, None);
}

#[test]
fn camel_case_keys_accepted() {
    let exercise = Exercise::from_toml_str(
        "title = \"t\"\n[[expectations]]\nname = \"a\"\nexpectedSubstring = \"x\"\n",
    )
    .unwrap();
    assert_eq!(exercise.expectations[0].expected_substring, "x");
}

#[yare::parameterized(
    blank_title = { "title = \"  \"" },
    duplicate_rule = {
        "title = \"t\"\n[[expectations]]\nname = \"a\"\nexpected_substring = \"\"\n[[expectations]]\nname = \"a\"\nexpected_substring = \"\"\n"
    },
)]
fn rejects_invalid(input: &str) {
    assert!(matches!(Exercise::from_toml_str(input), Err(ExerciseError::Invalid(_))));
}

#[test]
fn rejects_malformed_toml() {
    let err = Exercise::from_toml_str("title = ").unwrap_err();
    assert!(matches!(err, ExerciseError::Toml(_)));
    assert!(err.to_string().starts_with("invalid exercise TOML"));
}

#[yare::parameterized(
    misspelled_rule_key = { "title = \"t\"\n[[expectations]]\nname = \"greets\"\nexpected = \"Hello\"\n" },
    missing_substring = { "title = \"t\"\n[[expectations]]\nname = \"greets\"\n" },
    misspelled_exercise_key = { "title = \"t\"\nstarter = \"\"\n" },
)]
fn rejects_unknown_or_missing_keys(input: &str) {
    assert!(matches!(Exercise::from_toml_str(input), Err(ExerciseError::Toml(_))));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(HELLO.as_bytes()).unwrap();
    let exercise = Exercise::load(file.path()).unwrap();
    assert_eq!(exercise.expectations.len(), 2);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Exercise::load(&path).unwrap_err();
    assert!(matches!(err, ExerciseError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
