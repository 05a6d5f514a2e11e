// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types with span information.

use crate::capture::CaptureFull;
use crate::normalize::thrown_message;
use crate::value::Value;
use crate::{ParseError, Span};

/// Who raised a thrown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowOrigin {
    /// A `throw` statement in the script.
    Script,
    /// A runtime error raised by the interpreter, e.g. a `TypeError`.
    Runtime,
}

/// Errors that end a script run.
///
/// Only [`ExecError::Thrown`] is visible to script `catch` blocks; the
/// other variants unwind straight to the host.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Uncaught exception.
    #[error("uncaught {value:?}")]
    Thrown { value: Value, span: Span, origin: ThrowOrigin },

    /// A thrown value that escaped the whole script, detached from the
    /// interpreter that produced it.
    #[error("{message}")]
    Uncaught { message: String, span: Span, origin: ThrowOrigin },

    /// The interrupt flag was raised or the deadline passed.
    #[error("execution interrupted")]
    Interrupted,

    /// Too many console lines.
    #[error(transparent)]
    OutputLimit(#[from] CaptureFull),

    /// Parse error when the executor is given raw source.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ExecError {
    /// Returns the source span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            ExecError::Thrown { span, .. } | ExecError::Uncaught { span, .. } => Some(*span),
            ExecError::Parse(e) => e.span(),
            ExecError::Interrupted | ExecError::OutputLimit(_) => None,
        }
    }

    /// Message shown to the learner: an error's `message`, the text of a
    /// thrown non-error value, or a syntax error with its position.
    pub fn message(&self, source: &str) -> String {
        match self {
            ExecError::Thrown { value, .. } => thrown_message(value),
            ExecError::Uncaught { message, .. } => message.clone(),
            ExecError::Parse(e) => format!("SyntaxError: {}", e.describe(source)),
            ExecError::Interrupted => "execution interrupted".to_string(),
            ExecError::OutputLimit(e) => e.to_string(),
        }
    }

    /// Attach `at` to a runtime error raised without a location.
    pub(crate) fn at(mut self, at: Span) -> Self {
        if let ExecError::Thrown { span, .. } = &mut self {
            if *span == Span::default() {
                *span = at;
            }
        }
        self
    }

    /// Replace a thrown value by its rendered message so the error can
    /// outlive the interpreter.
    pub(crate) fn detach(self) -> Self {
        match self {
            ExecError::Thrown { value, span, origin } => {
                ExecError::Uncaught { message: thrown_message(&value), span, origin }
            }
            other => other,
        }
    }

    /// True for errors a script `catch` block can observe.
    pub(crate) fn is_catchable(&self) -> bool {
        matches!(self, ExecError::Thrown { .. })
    }

    /// Caret diagnostic for errors with a span.
    pub fn diagnostic(&self, source: &str) -> Option<String> {
        if let ExecError::Parse(e) = self {
            return e.diagnostic(source);
        }
        let span = self.span()?;
        Some(crate::diagnostic_context(source, span, &self.message(source)))
    }
}
