// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for specs.

pub use kata_core::test_support::rules;
pub use kata_core::{ErrorKind, ExecutionResult};
pub use kata_engine::{execute, EngineConfig};
pub use std::time::Duration;

/// Fluent checks over one execution.
pub struct Run {
    result: ExecutionResult,
}

/// Execute `source` with no expectations.
pub fn run(source: &str) -> Run {
    Run { result: execute(source, &[]) }
}

/// Execute `source` against `(name, substring)` rules.
pub fn check(source: &str, pairs: &[(&str, &str)]) -> Run {
    Run { result: execute(source, &rules(pairs)) }
}

impl Run {
    /// Assert the exact captured output.
    pub fn outputs(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.result.output(), expected);
        self
    }

    /// Assert the run finished without an error.
    pub fn succeeds(self) -> Self {
        assert_eq!(self.result.error(), None, "output:\n{}", self.result.output());
        self
    }

    /// Assert the run failed with `message` and `kind`.
    pub fn fails_with(self, kind: ErrorKind, message: &str) -> Self {
        similar_asserts::assert_eq!(self.result.error(), Some(message));
        assert_eq!(self.result.error_kind(), Some(kind));
        self
    }

    /// Assert the overall verdict.
    pub fn all_passed(self, expected: bool) -> Self {
        assert_eq!(self.result.all_passed(), expected, "{:#?}", self.result);
        self
    }

    /// Assert per-rule verdicts in order.
    pub fn verdicts(self, expected: &[bool]) -> Self {
        let actual: Vec<bool> = self.result.test_results().iter().map(|r| r.passed).collect();
        assert_eq!(actual, expected);
        self
    }

    pub fn result(self) -> ExecutionResult {
        self.result
    }
}
