// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs learner code on a dedicated worker thread.
//!
//! The worker owns the interpreter; the host only shares the capture
//! buffer and an interrupt flag with it. If the worker overruns its
//! deadline the host raises the flag and reports a timeout with whatever
//! output was captured so far, without waiting for the worker to notice.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use kata_core::{ErrorKind, ExecutionOutcome};
use kata_script::{Capture, ExecError, ScriptExecutor, ThrowOrigin};
use tracing::field::Empty;

use crate::EngineConfig;

/// Extra time the host waits past the deadline for the worker's own report.
const DEADLINE_GRACE: Duration = Duration::from_millis(100);

const WORKER_LOST: &str = "script worker stopped unexpectedly";

/// What the worker reports back; plain data so it can cross threads.
type Failure = (ErrorKind, String);

#[derive(Debug, Clone, Default)]
pub struct Sandbox {
    config: EngineConfig,
}

impl Sandbox {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run `source` to completion, a deadline, or a failure.
    ///
    /// Never panics and never returns an error: every failure becomes the
    /// `error_message` of the outcome.
    pub fn execute(&self, source: &str) -> ExecutionOutcome {
        let span = tracing::info_span!(
            "kata.exec",
            source_len = source.len(),
            lines = Empty,
            error_kind = Empty,
            duration_ms = Empty,
        );
        let _enter = span.enter();
        let started = Instant::now();

        let capture = Capture::with_limit(self.config.max_output_lines);
        let failure = self.run_worker(source, &capture);
        let outcome = match failure {
            None => ExecutionOutcome::success(capture.text()),
            Some((kind, message)) => ExecutionOutcome::failure(capture.text(), kind, message),
        };

        span.record("lines", capture.len());
        if let Some(kind) = outcome.error_kind {
            span.record("error_kind", tracing::field::display(kind));
        }
        span.record("duration_ms", started.elapsed().as_millis() as u64);
        match &outcome.error_message {
            Some(message) => tracing::debug!(%message, "script failed"),
            None => tracing::debug!("script finished"),
        }
        outcome
    }

    fn run_worker(&self, source: &str, capture: &Capture) -> Option<Failure> {
        let interrupt = Arc::new(AtomicBool::new(false));
        let executor = ScriptExecutor::new(capture.clone())
            .interrupt(interrupt.clone())
            .timeout(self.config.timeout)
            .max_call_depth(self.config.max_call_depth);
        let timeout = self.config.timeout;

        let (tx, rx) = mpsc::channel::<Option<Failure>>();
        let owned = source.to_string();
        let span = tracing::Span::current();
        let spawned = thread::Builder::new()
            .name("kata-exec".to_string())
            .stack_size(self.config.worker_stack_bytes)
            .spawn(move || {
                let _enter = span.enter();
                let failure = executor.execute_str(&owned).err().map(|e| {
                    if let Some(diagnostic) = e.diagnostic(&owned) {
                        tracing::debug!("script error\n{diagnostic}");
                    }
                    classify(&e, &owned, timeout)
                });
                let _ = tx.send(failure);
                tracing::trace!("script worker exiting");
            });
        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to start script worker");
            return Some((ErrorKind::Internal, WORKER_LOST.to_string()));
        }

        let received = match timeout {
            Some(limit) => rx.recv_timeout(limit + DEADLINE_GRACE),
            None => rx.recv().map_err(|_| mpsc::RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(failure) => failure,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                interrupt.store(true, Ordering::SeqCst);
                tracing::warn!("script worker missed its deadline");
                Some((ErrorKind::TimedOut, timed_out_message(timeout)))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::error!("script worker exited without reporting");
                Some((ErrorKind::Internal, WORKER_LOST.to_string()))
            }
        }
    }
}

/// Sort an interpreter error into the learner-facing taxonomy.
fn classify(error: &ExecError, source: &str, timeout: Option<Duration>) -> Failure {
    let kind = match error {
        ExecError::Parse(_) => ErrorKind::Syntax,
        ExecError::Uncaught { origin: ThrowOrigin::Runtime, .. }
        | ExecError::Thrown { origin: ThrowOrigin::Runtime, .. } => ErrorKind::Runtime,
        ExecError::Uncaught { origin: ThrowOrigin::Script, .. }
        | ExecError::Thrown { origin: ThrowOrigin::Script, .. } => ErrorKind::Thrown,
        ExecError::Interrupted => return (ErrorKind::TimedOut, timed_out_message(timeout)),
        ExecError::OutputLimit(_) => ErrorKind::ResourceLimit,
    };
    (kind, error.message(source))
}

fn timed_out_message(timeout: Option<Duration>) -> String {
    match timeout {
        Some(limit) => format!("execution timed out after {} ms", limit.as_millis()),
        None => "execution interrupted".to_string(),
    }
}

#[cfg(test)]
#[path = "sandbox_tests.rs"]
mod tests;
