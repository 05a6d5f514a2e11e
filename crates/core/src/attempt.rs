// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A settled run, as handed to attempt persistence.

use serde::{Deserialize, Serialize};

use crate::ExecutionResult;

crate::define_id! {
    /// Unique identifier for one attempt at an exercise.
    pub struct AttemptId("att-");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub id: AttemptId,
    pub source: String,
    pub result: ExecutionResult,
    pub recorded_at_ms: u64,
    /// Time since the previous attempt settled; `None` for the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_since_previous_ms: Option<u64>,
}

impl AttemptRecord {
    pub fn new(source: impl Into<String>, result: ExecutionResult, recorded_at_ms: u64) -> Self {
        Self {
            id: AttemptId::new(),
            source: source.into(),
            result,
            recorded_at_ms,
            elapsed_since_previous_ms: None,
        }
    }

    pub fn with_elapsed(mut self, elapsed_ms: Option<u64>) -> Self {
        self.elapsed_since_previous_ms = elapsed_ms;
        self
    }
}

#[cfg(test)]
#[path = "attempt_tests.rs"]
mod tests;
