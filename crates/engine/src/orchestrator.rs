// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run state machine for one learner workspace.
//!
//! ```text
//! Idle ──run──▶ Running ──settle──▶ Settled(result)
//!   ▲                                   │
//!   └───────────────reset───────────────┘
//! ```
//!
//! Only one run may be in flight. A `reset` during a run bumps the
//! generation so the run's result is returned to its caller but never
//! published.

use std::sync::Arc;
use std::time::Instant;

use kata_core::{AttemptRecord, Clock, ErrorKind, ExecutionOutcome, ExecutionResult, ExpectationRule, SystemClock, TutorContext};
use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;

use crate::listener::{AttemptListener, TutorContextListener};
use crate::{assertions, EngineConfig, Sandbox};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("a run is already in progress")]
    AlreadyRunning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Settled(Arc<ExecutionResult>),
}

kata_core::simple_display! {
    RunState {
        Idle => "idle",
        Running => "running",
        Settled(..) => "settled",
    }
}

impl RunState {
    pub fn result(&self) -> Option<&ExecutionResult> {
        match self {
            RunState::Settled(result) => Some(result),
            _ => None,
        }
    }
}

struct Inner {
    state: RunState,
    code: String,
    generation: u64,
    last_settled_at: Option<Instant>,
}

struct Shared<C: Clock> {
    inner: Mutex<Inner>,
    state_tx: watch::Sender<RunState>,
    sandbox: Sandbox,
    clock: C,
    tutor_listeners: Vec<Arc<dyn TutorContextListener>>,
    attempt_listeners: Vec<Arc<dyn AttemptListener>>,
}

/// Cloneable handle; clones drive the same state.
pub struct Orchestrator<C: Clock = SystemClock> {
    shared: Arc<Shared<C>>,
}

impl<C: Clock> Clone for Orchestrator<C> {
    fn clone(&self) -> Self {
        Self { shared: Arc::clone(&self.shared) }
    }
}

/// Assembles an [`Orchestrator`] with its listeners.
pub struct OrchestratorBuilder<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
    initial_code: String,
    tutor_listeners: Vec<Arc<dyn TutorContextListener>>,
    attempt_listeners: Vec<Arc<dyn AttemptListener>>,
}

impl OrchestratorBuilder<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
            initial_code: String::new(),
            tutor_listeners: Vec::new(),
            attempt_listeners: Vec::new(),
        }
    }
}

impl<C: Clock> OrchestratorBuilder<C> {
    pub fn clock<C2: Clock>(self, clock: C2) -> OrchestratorBuilder<C2> {
        OrchestratorBuilder {
            config: self.config,
            clock,
            initial_code: self.initial_code,
            tutor_listeners: self.tutor_listeners,
            attempt_listeners: self.attempt_listeners,
        }
    }

    pub fn initial_code(mut self, code: impl Into<String>) -> Self {
        self.initial_code = code.into();
        self
    }

    pub fn tutor_listener(mut self, listener: impl TutorContextListener) -> Self {
        self.tutor_listeners.push(Arc::new(listener));
        self
    }

    pub fn attempt_listener(mut self, listener: impl AttemptListener) -> Self {
        self.attempt_listeners.push(Arc::new(listener));
        self
    }

    pub fn build(self) -> Orchestrator<C> {
        let (state_tx, _) = watch::channel(RunState::Idle);
        Orchestrator {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    state: RunState::Idle,
                    code: self.initial_code,
                    generation: 0,
                    last_settled_at: None,
                }),
                state_tx,
                sandbox: Sandbox::new(self.config),
                clock: self.clock,
                tutor_listeners: self.tutor_listeners,
                attempt_listeners: self.attempt_listeners,
            }),
        }
    }
}

impl Orchestrator<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        OrchestratorBuilder::new(config).build()
    }

    pub fn builder(config: EngineConfig) -> OrchestratorBuilder<SystemClock> {
        OrchestratorBuilder::new(config)
    }
}

impl<C: Clock> Orchestrator<C> {
    /// Execute `code` against `expectations` and publish the verdict.
    ///
    /// Rejected with [`RunError::AlreadyRunning`] while another run is in
    /// flight.
    pub async fn run(
        &self,
        code: impl Into<String>,
        expectations: Vec<ExpectationRule>,
    ) -> Result<ExecutionResult, RunError> {
        let code = code.into();
        let generation = {
            let mut inner = self.shared.inner.lock();
            if inner.state == RunState::Running {
                tracing::debug!("run rejected, already running");
                return Err(RunError::AlreadyRunning);
            }
            inner.code = code.clone();
            self.transition(&mut inner, RunState::Running);
            inner.generation
        };
        tracing::info!(generation, source_len = code.len(), rules = expectations.len(), "run started");

        // The run settles even if the caller stops polling.
        let task = tokio::spawn(self.clone().execute_and_settle(generation, code, expectations));
        Ok(task.await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "run task failed");
            let result = internal_failure("run task failed");
            self.settle(generation, &result);
            result
        }))
    }

    async fn execute_and_settle(
        self,
        generation: u64,
        code: String,
        expectations: Vec<ExpectationRule>,
    ) -> ExecutionResult {
        let sandbox = self.shared.sandbox.clone();
        let source = code.clone();
        let result = tokio::task::spawn_blocking(move || {
            let outcome = sandbox.execute(&source);
            assertions::judge(outcome, &expectations)
        })
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "execution task failed");
            internal_failure("execution task failed")
        });

        let Some(elapsed) = self.settle(generation, &result) else {
            tracing::info!(generation, "run finished after reset, result discarded");
            return result;
        };
        tracing::info!(generation, all_passed = result.all_passed(), error_kind = ?result.error_kind(), "run settled");

        self.notify(&code, &result, elapsed).await;
        result
    }

    /// Move a still-current run to `Settled`. `None` when a reset
    /// superseded the run; otherwise the time since the previous settle.
    fn settle(&self, generation: u64, result: &ExecutionResult) -> Option<Option<u64>> {
        let mut inner = self.shared.inner.lock();
        if inner.generation != generation || inner.state != RunState::Running {
            return None;
        }
        let now = self.shared.clock.now();
        let elapsed = inner.last_settled_at.map(|previous| self.shared.clock.elapsed_ms(previous));
        inner.last_settled_at = Some(now);
        self.transition(&mut inner, RunState::Settled(Arc::new(result.clone())));
        Some(elapsed)
    }

    /// Back to `Idle` with `initial_code`, dropping any settled result.
    pub fn reset(&self, initial_code: impl Into<String>) {
        let mut inner = self.shared.inner.lock();
        inner.generation += 1;
        inner.code = initial_code.into();
        self.transition(&mut inner, RunState::Idle);
    }

    pub fn state(&self) -> RunState {
        self.shared.inner.lock().state.clone()
    }

    pub fn is_running(&self) -> bool {
        self.shared.inner.lock().state == RunState::Running
    }

    pub fn last_result(&self) -> Option<ExecutionResult> {
        self.shared.inner.lock().state.result().cloned()
    }

    pub fn code(&self) -> String {
        self.shared.inner.lock().code.clone()
    }

    /// Replace the editable code without touching the run state.
    pub fn set_code(&self, code: impl Into<String>) {
        self.shared.inner.lock().code = code.into();
    }

    /// Observe every state transition.
    pub fn watch_state(&self) -> watch::Receiver<RunState> {
        self.shared.state_tx.subscribe()
    }

    fn transition(&self, inner: &mut Inner, next: RunState) {
        tracing::debug!(from = %inner.state, to = %next, "state transition");
        inner.state = next.clone();
        self.shared.state_tx.send_replace(next);
    }

    async fn notify(&self, code: &str, result: &ExecutionResult, elapsed: Option<u64>) {
        let context = TutorContext::from(result);
        for listener in &self.shared.tutor_listeners {
            if let Err(e) = listener.context_updated(context.clone()).await {
                tracing::warn!(error = %e, "tutor listener failed");
            }
        }

        if self.shared.attempt_listeners.is_empty() {
            return;
        }
        let record =
            AttemptRecord::new(code, result.clone(), self.shared.clock.epoch_ms()).with_elapsed(elapsed);
        for listener in &self.shared.attempt_listeners {
            if let Err(e) = listener.attempt_settled(record.clone()).await {
                tracing::warn!(error = %e, attempt = %record.id, "attempt listener failed");
            }
        }
    }
}

fn internal_failure(message: &str) -> ExecutionResult {
    ExecutionResult::compose(ExecutionOutcome::failure("", ErrorKind::Internal, message), Vec::new())
}

#[cfg(test)]
#[path = "orchestrator_tests/mod.rs"]
mod tests;
