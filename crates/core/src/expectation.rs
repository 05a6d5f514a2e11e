// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hidden expectations an exercise checks learner output against.

use serde::{Deserialize, Serialize};

/// A named substring that must appear in the captured output.
///
/// An empty `expected_substring` is satisfied by any run that finishes
/// without an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpectationRule {
    pub name: String,
    #[serde(alias = "expected_substring")]
    pub expected_substring: String,
}

impl ExpectationRule {
    pub fn new(name: impl Into<String>, expected_substring: impl Into<String>) -> Self {
        Self { name: name.into(), expected_substring: expected_substring.into() }
    }

    /// Substring containment against `captured_text`; ignores errors.
    pub fn matches(&self, captured_text: &str) -> bool {
        captured_text.contains(self.expected_substring.as_str())
    }
}

#[cfg(test)]
#[path = "expectation_tests.rs"]
mod tests;
