// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the script executor.

use super::*;

mod basic;
mod control_flow;
mod destructuring;
mod errors;
mod functions;
mod limits;
mod objects;
mod output;
mod scoping;

pub(crate) use crate::test_support::{error, on_large_stack, output, run};

/// Create a default executor with a fresh capture buffer.
pub(crate) fn executor() -> ScriptExecutor {
    ScriptExecutor::new(Capture::new())
}
