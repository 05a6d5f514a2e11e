// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kata-core: data model shared by the kata script engine and its callers

pub mod macros;

pub mod attempt;
pub mod clock;
pub mod exercise;
pub mod expectation;
pub mod id;
pub mod result;
pub mod tutor;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use attempt::{AttemptId, AttemptRecord};
pub use clock::{Clock, FakeClock, SystemClock};
pub use exercise::{Exercise, ExerciseError};
pub use expectation::ExpectationRule;
pub use result::{ErrorKind, ExecutionOutcome, ExecutionResult, ExpectationResult};
pub use tutor::TutorContext;
