// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for learner scripts.

use serde::{Deserialize, Serialize};

/// A byte-offset range in the script source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    /// Extract the spanned text, or `""` when out of bounds or not on a char
    /// boundary.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Locate a span in source, returning (line_number, column, line_content).
///
/// Line numbers are 1-indexed; column is 0-indexed in characters.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let start = span.start.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, ch) in source.char_indices() {
        if i >= start {
            break;
        }
        if ch == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..].find('\n').map(|i| line_start + i).unwrap_or(source.len());
    let col = source.get(line_start..start).map(|s| s.chars().count()).unwrap_or(0);

    (line_num, col, &source[line_start..line_end])
}

/// Render a rustc-style diagnostic with line/column info and carets.
///
/// ```text
/// error: unexpected token ')' at line 1, column 13, expected expression
///   --> line 1, column 13
///    |
///  1 | console.log())
///    |             ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let line_rest = line_content.chars().count().saturating_sub(col).max(1);
    let caret_len = span.len().clamp(1, line_rest);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(caret_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
