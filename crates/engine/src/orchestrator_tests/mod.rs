// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod listeners;
mod runs;
mod state;

use super::*;
use crate::{FakeAttemptListener, FakeTutorListener};
use kata_core::FakeClock;
use std::time::Duration;

/// Script that spins until the configured deadline stops it.
const SPIN: &str = "console.log('spinning'); while (true) {}";

struct TestContext {
    orchestrator: Orchestrator<FakeClock>,
    clock: FakeClock,
    tutor: FakeTutorListener,
    attempts: FakeAttemptListener,
}

fn setup_with(config: EngineConfig) -> TestContext {
    let clock = FakeClock::new();
    let tutor = FakeTutorListener::new();
    let attempts = FakeAttemptListener::new();
    let orchestrator = Orchestrator::builder(config)
        .clock(clock.clone())
        .initial_code("// write your code here")
        .tutor_listener(tutor.clone())
        .attempt_listener(attempts.clone())
        .build();
    TestContext { orchestrator, clock, tutor, attempts }
}

fn setup() -> TestContext {
    setup_with(EngineConfig::default())
}

/// A context whose runs of [`SPIN`] last about `ms` milliseconds.
fn setup_spinning(ms: u64) -> TestContext {
    setup_with(EngineConfig::default().timeout(Some(Duration::from_millis(ms))))
}

/// Wait until the orchestrator reports `Running`.
async fn wait_running<C: Clock>(orchestrator: &Orchestrator<C>) {
    let mut rx = orchestrator.watch_state();
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| *s == RunState::Running))
        .await
        .expect("run never started")
        .expect("state channel closed");
}
