// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use kata_core::test_support::rules;

#[tokio::test]
async fn run_settles_with_result() {
    let ctx = setup();
    let result = ctx
        .orchestrator
        .run("console.log('Hello, World!')", rules(&[("greets", "Hello"), ("bye", "Bye")]))
        .await
        .unwrap();

    assert!(!result.all_passed());
    assert_eq!(result.output(), "Hello, World!");
    assert_eq!(ctx.orchestrator.state(), RunState::Settled(Arc::new(result.clone())));
    assert_eq!(ctx.orchestrator.last_result(), Some(result));
    assert_eq!(ctx.orchestrator.code(), "console.log('Hello, World!')");
    assert!(!ctx.orchestrator.is_running());
}

#[tokio::test]
async fn reentrant_run_is_rejected() {
    let ctx = setup_spinning(300);
    let first = tokio::spawn({
        let orchestrator = ctx.orchestrator.clone();
        async move { orchestrator.run(SPIN, vec![]).await }
    });
    wait_running(&ctx.orchestrator).await;

    assert!(ctx.orchestrator.is_running());
    let second = ctx.orchestrator.run("console.log('second')", vec![]).await;
    assert_eq!(second, Err(RunError::AlreadyRunning));

    let first = first.await.unwrap().unwrap();
    assert_eq!(first.error_kind(), Some(ErrorKind::TimedOut));
    assert_eq!(first.output(), "spinning");
    assert_eq!(ctx.tutor.contexts().len(), 1);
}

#[tokio::test]
async fn new_run_supersedes_settled_result() {
    let ctx = setup();
    ctx.orchestrator.run("console.log(1)", vec![]).await.unwrap();
    let second = ctx.orchestrator.run("console.log(2)", vec![]).await.unwrap();
    assert_eq!(ctx.orchestrator.last_result().map(|r| r.output().to_string()), Some("2".to_string()));
    assert_eq!(second.output(), "2");
}

#[tokio::test]
async fn crash_is_settled_not_rejected() {
    let ctx = setup();
    let result = ctx.orchestrator.run("throw new Error('boom')", rules(&[("runs", "")])).await.unwrap();
    assert_eq!(result.error(), Some("boom"));
    assert_eq!(result.error_kind(), Some(ErrorKind::Thrown));
    assert!(!result.test_results()[0].passed);
    assert!(matches!(ctx.orchestrator.state(), RunState::Settled(_)));
}

#[tokio::test]
async fn dropped_caller_still_settles() {
    let ctx = setup_spinning(200);
    let abandoned = tokio::time::timeout(Duration::from_millis(50), ctx.orchestrator.run(SPIN, vec![])).await;
    assert!(abandoned.is_err());
    assert!(ctx.orchestrator.is_running());

    let mut rx = ctx.orchestrator.watch_state();
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| *s != RunState::Running))
        .await
        .expect("run never settled")
        .expect("state channel closed");

    let settled = ctx.orchestrator.last_result().expect("settled result");
    assert_eq!(settled.error_kind(), Some(ErrorKind::TimedOut));

    let next = ctx.orchestrator.run("console.log('again')", vec![]).await.unwrap();
    assert_eq!(next.output(), "again");
}
