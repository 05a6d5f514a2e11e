// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the run state machine seen by an editor session.

use crate::prelude::*;
use kata_core::FakeClock;
use kata_engine::{FakeAttemptListener, FakeTutorListener, Orchestrator, RunError, RunState};

/// A run settles, publishes to listeners, and can be reset
#[tokio::test]
async fn run_settle_reset() {
    let tutor = FakeTutorListener::new();
    let attempts = FakeAttemptListener::new();
    let clock = FakeClock::new();
    let orchestrator = Orchestrator::builder(EngineConfig::default())
        .clock(clock.clone())
        .initial_code("// start")
        .tutor_listener(tutor.clone())
        .attempt_listener(attempts.clone())
        .build();

    let rules = rules(&[("sum", "6")]);
    let first = orchestrator.run("console.log(1 + 2)", rules.clone()).await.unwrap();
    assert!(!first.all_passed());
    clock.advance(Duration::from_secs(42));
    let second = orchestrator.run("console.log(1 + 2 + 3)", rules).await.unwrap();
    assert!(second.all_passed());

    assert_eq!(tutor.contexts().last().unwrap().summary(), "1 of 1 passed");
    let records = attempts.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].elapsed_since_previous_ms, Some(42_000));
    assert_eq!(records[1].source, "console.log(1 + 2 + 3)");

    orchestrator.reset("// start");
    assert_eq!(orchestrator.state(), RunState::Idle);
    assert_eq!(orchestrator.last_result(), None);
    assert_eq!(orchestrator.code(), "// start");
}

/// Clicking run twice never interleaves executions
#[tokio::test]
async fn reentrant_run_rejected() {
    let orchestrator = Orchestrator::new(EngineConfig::default().timeout(Some(Duration::from_millis(200))));
    let mut states = orchestrator.watch_state();
    let first = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.run("while (true) {}", vec![]).await }
    });
    states.wait_for(|s| *s == RunState::Running).await.unwrap();

    assert_eq!(orchestrator.run("console.log(1)", vec![]).await, Err(RunError::AlreadyRunning));
    let first = first.await.unwrap().unwrap();
    assert_eq!(first.error_kind(), Some(ErrorKind::TimedOut));
}

/// Closures created in a `for (let ...)` loop see their own iteration's value
#[tokio::test]
async fn per_iteration_bindings() {
    let orchestrator = Orchestrator::new(EngineConfig::default());
    let result = orchestrator
        .run(
            "const fs = []; for (let i = 0; i < 3; i++) fs.push(() => i); console.log(fs.map(f => f()))",
            rules(&[("values", "0,1,2")]),
        )
        .await
        .unwrap();
    assert!(result.all_passed(), "{result:?}");
}
