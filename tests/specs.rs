// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end behavioural specs: learner code in, verdicts out.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/execution.rs"]
mod execution;
#[path = "specs/exercises.rs"]
mod exercises;
#[path = "specs/expectations.rs"]
mod expectations;
#[path = "specs/language.rs"]
mod language;
#[path = "specs/normalization.rs"]
mod normalization;
#[path = "specs/orchestration.rs"]
mod orchestration;
