// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use kata_core::test_support::rules;

#[tokio::test]
async fn tutor_receives_context() {
    let ctx = setup();
    ctx.orchestrator
        .run("console.log(2 + 2)", rules(&[("four", "4"), ("five", "5")]))
        .await
        .unwrap();

    let contexts = ctx.tutor.contexts();
    assert_eq!(contexts.len(), 1);
    assert!(!contexts[0].all_passed);
    assert_eq!(contexts[0].summary(), "1 of 2 passed; failing: five");
}

#[tokio::test]
async fn attempts_carry_source_and_elapsed_time() {
    let ctx = setup();
    ctx.orchestrator.run("console.log('first')", vec![]).await.unwrap();
    ctx.clock.advance(Duration::from_millis(1500));
    ctx.orchestrator.run("console.log('second')", vec![]).await.unwrap();

    let records = ctx.attempts.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source, "console.log('first')");
    assert_eq!(records[0].elapsed_since_previous_ms, None);
    assert_eq!(records[1].elapsed_since_previous_ms, Some(1500));
    assert_eq!(records[1].result.output(), "second");
    assert_eq!(records[1].recorded_at_ms, records[0].recorded_at_ms + 1500);
    assert_ne!(records[0].id, records[1].id);
}

#[tokio::test]
async fn failing_listener_does_not_fail_run() {
    let attempts = FakeAttemptListener::new();
    let tutor = FakeTutorListener::failing();
    let orchestrator = Orchestrator::builder(EngineConfig::default())
        .tutor_listener(tutor.clone())
        .attempt_listener(attempts.clone())
        .build();

    let result = orchestrator.run("console.log('ok')", vec![]).await.unwrap();
    assert!(result.all_passed());
    assert_eq!(tutor.contexts().len(), 1);
    assert_eq!(attempts.records().len(), 1);
}

#[tokio::test]
async fn rejected_run_notifies_nobody() {
    let ctx = setup_spinning(200);
    let first = tokio::spawn({
        let orchestrator = ctx.orchestrator.clone();
        async move { orchestrator.run(SPIN, vec![]).await }
    });
    wait_running(&ctx.orchestrator).await;
    let _ = ctx.orchestrator.run("console.log(1)", vec![]).await;
    assert!(ctx.attempts.records().is_empty());
    first.await.unwrap().unwrap();
    assert_eq!(ctx.attempts.records().len(), 1);
}
