// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers for running scripts from unit tests.

use std::thread;

use crate::{Capture, ScriptExecutor};

/// Scripts recurse on the native stack; the default test thread is too
/// small for the default call depth.
const STACK_BYTES: usize = 256 * 1024 * 1024;

/// Run `f` on a thread with a large stack.
pub(crate) fn on_large_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    let handle = thread::Builder::new().stack_size(STACK_BYTES).spawn(f).expect("spawn script thread");
    handle.join().expect("script thread panicked")
}

/// Run `source` on a large-stack thread and return the captured output
/// with the rendered error message, if any.
pub(crate) fn run(source: &str) -> (String, Result<(), String>) {
    let source = source.to_string();
    on_large_stack(move || {
        let capture = Capture::new();
        let result = ScriptExecutor::new(capture.clone()).execute_str(&source).map_err(|e| e.message(&source));
        (capture.text(), result)
    })
}

/// Output of a script that must succeed.
pub(crate) fn output(source: &str) -> String {
    let (text, result) = run(source);
    if let Err(message) = result {
        panic!("script failed: {message}\noutput so far:\n{text}");
    }
    text
}

/// Message of a script that must fail.
pub(crate) fn error(source: &str) -> String {
    match run(source) {
        (_, Err(message)) => message,
        (text, Ok(())) => panic!("script succeeded with output:\n{text}"),
    }
}
