// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exercise definitions loaded from TOML.
//!
//! ```toml
//! title = "Say hello"
//! starter_code = "// print a greeting\n"
//!
//! [[expectations]]
//! name = "greets"
//! expected_substring = "Hello"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ExpectationRule;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid exercise TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid exercise: {0}")]
    Invalid(String),
}

/// Title, starter code and hidden expectations for one exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Exercise {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub starter_code: String,
    #[serde(default)]
    pub expectations: Vec<ExpectationRule>,
}

impl Exercise {
    pub fn from_toml_str(input: &str) -> Result<Self, ExerciseError> {
        let exercise: Exercise = toml::from_str(input)?;
        exercise.validate()?;
        Ok(exercise)
    }

    pub fn load(path: &Path) -> Result<Self, ExerciseError> {
        let input = std::fs::read_to_string(path)
            .map_err(|source| ExerciseError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&input)
    }

    /// Titles must be non-blank and expectation names unique.
    fn validate(&self) -> Result<(), ExerciseError> {
        if self.title.trim().is_empty() {
            return Err(ExerciseError::Invalid("title is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for rule in &self.expectations {
            if !seen.insert(rule.name.as_str()) {
                return Err(ExerciseError::Invalid(format!("duplicate expectation '{}'", rule.name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "exercise_tests.rs"]
mod tests;
