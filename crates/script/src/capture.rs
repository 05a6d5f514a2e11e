// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only capture buffer for console output.
//!
//! The buffer is shared with the host thread, so lines written before a
//! crash or a timeout stay readable after the interpreter stops.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Output channel of a console call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// `console.log`, `console.info`, `console.debug`
    Info,
    /// `console.error`
    Error,
    /// `console.warn`
    Warning,
}

impl Channel {
    pub fn prefix(self) -> &'static str {
        match self {
            Channel::Info => "",
            Channel::Error => "Error: ",
            Channel::Warning => "Warning: ",
        }
    }
}

/// One captured output call. `text` already carries the channel prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedLine {
    pub channel: Channel,
    pub text: String,
}

/// The line limit was reached; nothing more is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("output limit of {limit} lines exceeded")]
pub struct CaptureFull {
    pub limit: usize,
}

/// Cloneable handle to a shared capture buffer.
#[derive(Debug, Clone)]
pub struct Capture {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
    limit: usize,
}

impl Default for Capture {
    fn default() -> Self {
        Self::new()
    }
}

impl Capture {
    pub fn new() -> Self {
        Self::with_limit(usize::MAX)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { lines: Arc::new(Mutex::new(Vec::new())), limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a line, or fail once `limit` lines are already stored.
    pub fn push(&self, channel: Channel, text: String) -> Result<(), CaptureFull> {
        let mut lines = self.lines.lock();
        if lines.len() >= self.limit {
            return Err(CaptureFull { limit: self.limit });
        }
        lines.push(CapturedLine { channel, text });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Copy of every line captured so far.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Captured lines joined with `\n` in call order.
    pub fn text(&self) -> String {
        let lines = self.lines.lock();
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.text);
        }
        out
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
