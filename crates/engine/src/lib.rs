// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kata-engine: runs learner code in a sandbox and judges it against
//! hidden expectations.
//!
//! [`execute`] is the one-shot entry point; [`Orchestrator`] adds the
//! run state machine, reentrancy guard and listener fan-out an editor
//! session needs.

pub mod assertions;
pub mod config;
pub mod listener;
pub mod orchestrator;
pub mod sandbox;

pub use config::{ConfigError, EngineConfig};
pub use listener::{AttemptListener, ListenerError, TutorContextListener};
#[cfg(any(test, feature = "test-support"))]
pub use listener::{FakeAttemptListener, FakeTutorListener};
pub use orchestrator::{Orchestrator, OrchestratorBuilder, RunError, RunState};
pub use sandbox::Sandbox;

use kata_core::{ExecutionResult, ExpectationRule};

/// Run `source` with default limits and judge it against `expectations`.
pub fn execute(source: &str, expectations: &[ExpectationRule]) -> ExecutionResult {
    execute_with(&EngineConfig::default(), source, expectations)
}

/// [`execute`] with explicit limits.
pub fn execute_with(config: &EngineConfig, source: &str, expectations: &[ExpectationRule]) -> ExecutionResult {
    let outcome = Sandbox::new(config.clone()).execute(source);
    assertions::judge(outcome, expectations)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
