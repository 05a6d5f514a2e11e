// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborators notified when a run settles.

use async_trait::async_trait;
use kata_core::{AttemptRecord, TutorContext};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("listener rejected update: {0}")]
    Rejected(String),
}

/// Receives the latest verdict so the tutor can reason about it.
#[async_trait]
pub trait TutorContextListener: Send + Sync + 'static {
    async fn context_updated(&self, context: TutorContext) -> Result<(), ListenerError>;
}

/// Persists each settled attempt.
#[async_trait]
pub trait AttemptListener: Send + Sync + 'static {
    async fn attempt_settled(&self, record: AttemptRecord) -> Result<(), ListenerError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{AttemptListener, ListenerError, TutorContextListener};
    use async_trait::async_trait;
    use kata_core::{AttemptRecord, TutorContext};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeTutorState {
        contexts: Vec<TutorContext>,
        fail: bool,
    }

    /// Records every context; optionally rejects them after recording.
    #[derive(Clone, Default)]
    pub struct FakeTutorListener {
        inner: Arc<Mutex<FakeTutorState>>,
    }

    impl FakeTutorListener {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            let listener = Self::default();
            listener.inner.lock().fail = true;
            listener
        }

        pub fn contexts(&self) -> Vec<TutorContext> {
            self.inner.lock().contexts.clone()
        }
    }

    #[async_trait]
    impl TutorContextListener for FakeTutorListener {
        async fn context_updated(&self, context: TutorContext) -> Result<(), ListenerError> {
            let mut inner = self.inner.lock();
            inner.contexts.push(context);
            if inner.fail {
                return Err(ListenerError::Rejected("fake tutor offline".to_string()));
            }
            Ok(())
        }
    }

    /// Records every attempt.
    #[derive(Clone, Default)]
    pub struct FakeAttemptListener {
        records: Arc<Mutex<Vec<AttemptRecord>>>,
    }

    impl FakeAttemptListener {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn records(&self) -> Vec<AttemptRecord> {
            self.records.lock().clone()
        }
    }

    #[async_trait]
    impl AttemptListener for FakeAttemptListener {
        async fn attempt_settled(&self, record: AttemptRecord) -> Result<(), ListenerError> {
            self.records.lock().push(record);
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeAttemptListener, FakeTutorListener};
