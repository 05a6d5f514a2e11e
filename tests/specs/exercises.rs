// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for exercises loaded from TOML and run end to end.

use crate::prelude::*;
use kata_core::Exercise;

const FIZZBUZZ: &str = r#"
title = "FizzBuzz"
starter_code = """
for (let i = 1; i <= 15; i++) {
  // your code here
}
"""

[[expectations]]
name = "fizz"
expected_substring = "Fizz"

[[expectations]]
name = "buzz"
expected_substring = "Buzz"

[[expectations]]
name = "fizzbuzz"
expected_substring = "14\nFizzBuzz"
"#;

const SOLUTION: &str = r#"
for (let i = 1; i <= 15; i++) {
  if (i % 15 === 0) console.log("FizzBuzz");
  else if (i % 3 === 0) console.log("Fizz");
  else if (i % 5 === 0) console.log("Buzz");
  else console.log(i);
}
"#;

/// The starter code runs but fails every expectation
#[test]
fn starter_code_fails() {
    let exercise = Exercise::from_toml_str(FIZZBUZZ).unwrap();
    let result = execute(&exercise.starter_code, &exercise.expectations);
    assert_eq!(result.error(), None);
    assert_eq!(result.passed_count(), 0);
}

/// A correct solution passes every expectation
#[test]
fn solution_passes() {
    let exercise = Exercise::from_toml_str(FIZZBUZZ).unwrap();
    let result = execute(SOLUTION, &exercise.expectations);
    assert!(result.all_passed(), "{}", result.output());
}

/// Exercises load from disk
#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fizzbuzz.toml");
    std::fs::write(&path, FIZZBUZZ).unwrap();
    let exercise = Exercise::load(&path).unwrap();
    assert_eq!(exercise.title, "FizzBuzz");
    assert_eq!(exercise.expectations.len(), 3);
}
