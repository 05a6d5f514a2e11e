// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction so attempt timing can be tested

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// A clock that provides the current time
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;
    fn epoch_ms(&self) -> u64;

    /// Whole milliseconds elapsed since `earlier`, zero if the clock went backwards.
    fn elapsed_ms(&self, earlier: Instant) -> u64 {
        self.now().saturating_duration_since(earlier).as_millis() as u64
    }
}

/// Real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_ms(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
    }
}

#[derive(Debug)]
struct FakeTime {
    instant: Instant,
    epoch_ms: u64,
}

/// Manually advanced clock for tests
#[derive(Debug, Clone)]
pub struct FakeClock {
    time: Arc<Mutex<FakeTime>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { time: Arc::new(Mutex::new(FakeTime { instant: Instant::now(), epoch_ms: 1_000_000 })) }
    }

    /// Move both the monotonic and the wall clock forward.
    pub fn advance(&self, duration: Duration) {
        let mut time = self.time.lock();
        time.instant += duration;
        time.epoch_ms += duration.as_millis() as u64;
    }

    pub fn set_epoch_ms(&self, ms: u64) {
        self.time.lock().epoch_ms = ms;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.time.lock().instant
    }

    fn epoch_ms(&self) -> u64 {
        self.time.lock().epoch_ms
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
