// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::ExpectationRule;

// ── Proptest strategies ─────────────────────────────────────────────────

pub mod strategies {
    use crate::{ErrorKind, ExecutionOutcome, ExpectationResult, ExpectationRule};
    use proptest::prelude::*;

    pub fn arb_error_kind() -> impl Strategy<Value = ErrorKind> {
        prop_oneof![
            Just(ErrorKind::Syntax),
            Just(ErrorKind::Runtime),
            Just(ErrorKind::Thrown),
            Just(ErrorKind::TimedOut),
            Just(ErrorKind::ResourceLimit),
            Just(ErrorKind::Internal),
        ]
    }

    pub fn arb_outcome() -> impl Strategy<Value = ExecutionOutcome> {
        ("[a-z \n]{0,20}", proptest::option::of((arb_error_kind(), "[a-z ]{1,10}"))).prop_map(
            |(text, error)| match error {
                Some((kind, message)) => ExecutionOutcome::failure(text, kind, message),
                None => ExecutionOutcome::success(text),
            },
        )
    }

    pub fn arb_expectation_results() -> impl Strategy<Value = Vec<ExpectationResult>> {
        proptest::collection::vec(("[a-z]{1,6}", "[a-z]{0,3}", any::<bool>()), 0..6).prop_map(|rows| {
            rows.into_iter()
                .map(|(name, expected, passed)| {
                    ExpectationResult::new(&ExpectationRule::new(name, expected), "", passed)
                })
                .collect()
        })
    }
}

// ── Factories ───────────────────────────────────────────────────────────

pub fn rules(pairs: &[(&str, &str)]) -> Vec<ExpectationRule> {
    pairs.iter().map(|(name, expected)| ExpectationRule::new(*name, *expected)).collect()
}
