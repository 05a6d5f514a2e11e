// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn starts_idle_with_initial_code() {
    let ctx = setup();
    assert_eq!(ctx.orchestrator.state(), RunState::Idle);
    assert_eq!(ctx.orchestrator.code(), "// write your code here");
    assert_eq!(ctx.orchestrator.last_result(), None);
}

#[test]
fn set_code_keeps_state() {
    let ctx = setup();
    ctx.orchestrator.set_code("let x = 1");
    assert_eq!(ctx.orchestrator.code(), "let x = 1");
    assert_eq!(ctx.orchestrator.state(), RunState::Idle);
}

#[yare::parameterized(
    idle = { RunState::Idle, "idle" },
    running = { RunState::Running, "running" },
)]
fn state_display(state: RunState, expected: &str) {
    assert_eq!(state.to_string(), expected);
}

#[tokio::test]
async fn watch_observes_transitions() {
    let ctx = setup();
    let mut rx = ctx.orchestrator.watch_state();
    let seen = tokio::spawn(async move {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().to_string();
            let done = state == "idle";
            seen.push(state);
            if done {
                break;
            }
        }
        seen
    });

    ctx.orchestrator.run("console.log('x')", vec![]).await.unwrap();
    ctx.orchestrator.reset("");
    let seen = tokio::time::timeout(Duration::from_secs(5), seen).await.unwrap().unwrap();
    // Intermediate values may be coalesced by the watch channel.
    assert_eq!(seen.last().map(String::as_str), Some("idle"));
    assert!(seen.iter().all(|s| ["running", "settled", "idle"].contains(&s.as_str())), "{seen:?}");
}

#[tokio::test]
async fn reset_discards_settled_result() {
    let ctx = setup();
    ctx.orchestrator.run("console.log('done')", vec![]).await.unwrap();
    ctx.orchestrator.reset("// again");
    assert_eq!(ctx.orchestrator.state(), RunState::Idle);
    assert_eq!(ctx.orchestrator.last_result(), None);
    assert_eq!(ctx.orchestrator.code(), "// again");
}

#[tokio::test]
async fn reset_during_run_hides_result() {
    let ctx = setup_spinning(150);
    let run = tokio::spawn({
        let orchestrator = ctx.orchestrator.clone();
        async move { orchestrator.run(SPIN, vec![]).await }
    });
    wait_running(&ctx.orchestrator).await;
    ctx.orchestrator.reset("fresh");

    let result = run.await.unwrap().unwrap();
    assert_eq!(result.error_kind(), Some(ErrorKind::TimedOut));
    assert_eq!(ctx.orchestrator.state(), RunState::Idle);
    assert_eq!(ctx.orchestrator.code(), "fresh");
    assert!(ctx.tutor.contexts().is_empty());
    assert!(ctx.attempts.records().is_empty());
}

#[tokio::test]
async fn run_allowed_after_reset_during_run() {
    let ctx = setup_spinning(150);
    let stale = tokio::spawn({
        let orchestrator = ctx.orchestrator.clone();
        async move { orchestrator.run(SPIN, vec![]).await }
    });
    wait_running(&ctx.orchestrator).await;
    ctx.orchestrator.reset("");

    let fresh = ctx.orchestrator.run("console.log('fresh')", vec![]).await.unwrap();
    assert_eq!(fresh.output(), "fresh");
    stale.await.unwrap().unwrap();
    assert_eq!(ctx.orchestrator.last_result(), Some(fresh));
}
