// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use super::lexer::LexerError;
use super::token::{diagnostic_context, locate_span, Span, TokenKind};
use thiserror::Error;

/// Syntax errors in a script.
///
/// Use [`ParseError::diagnostic`] to render a caret snippet, or
/// [`ParseError::describe`] for the one-line message shown to learners.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("unexpected token {found} at position {}, expected {expected}", span.start)]
    UnexpectedToken { found: TokenKind, expected: String, span: Span },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// Assignment to something that is not a variable, member, or pattern.
    #[error("invalid assignment target at position {}", span.start)]
    InvalidAssignmentTarget { span: Span },

    /// `const x;`
    #[error("missing initializer in const declaration at position {}", span.start)]
    MissingInitializer { span: Span },

    /// Recognised syntax outside the supported language subset.
    #[error("{feature} are not supported")]
    Unsupported { feature: String, span: Span },

    #[error("nesting too deep at position {}", span.start)]
    NestingTooDeep { span: Span },

    /// Error inside a template literal `${...}`.
    #[error("in template literal: {inner}")]
    InTemplate { inner: Box<ParseError>, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lexer(e) => Some(e.span()),
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::UnexpectedEof { .. } => None,
            ParseError::InvalidAssignmentTarget { span } => Some(*span),
            ParseError::MissingInitializer { span } => Some(*span),
            ParseError::Unsupported { span, .. } => Some(*span),
            ParseError::NestingTooDeep { span } => Some(*span),
            ParseError::InTemplate { inner, span } => inner.span().or(Some(*span)),
        }
    }

    /// One-line message with a 1-indexed line and column, e.g.
    /// `unexpected token ')' ... (line 2, column 7)`.
    pub fn describe(&self, source: &str) -> String {
        match self.span() {
            Some(span) => {
                let (line, col, _) = locate_span(source, span);
                format!("{} (line {}, column {})", self, line, col + 1)
            }
            None => self.to_string(),
        }
    }

    /// Generate a rich diagnostic with line/column info, or `None` if no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        match self {
            ParseError::Lexer(e) => Some(e.diagnostic(input)),
            _ => Some(diagnostic_context(input, self.span()?, &self.to_string())),
        }
    }
}
