// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the script lexer.

use crate::{diagnostic_context, Span};
use thiserror::Error;

/// Errors that can occur during lexing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Character that cannot start any token.
    #[error("unexpected character '{ch}' at position {}", span.start)]
    UnexpectedChar { ch: char, span: Span },

    /// String literal missing its closing quote before end of line.
    #[error("unterminated string literal at position {}", span.start)]
    UnterminatedString { span: Span },

    /// Template literal missing its closing backtick.
    #[error("unterminated template literal at position {}", span.start)]
    UnterminatedTemplate { span: Span },

    /// `${` without a matching `}`.
    #[error("unterminated template interpolation at position {}", span.start)]
    UnterminatedInterpolation { span: Span },

    /// `/*` without `*/`.
    #[error("unterminated comment at position {}", span.start)]
    UnterminatedComment { span: Span },

    /// Malformed `\x`, `\u` escape.
    #[error("invalid escape sequence at position {}", span.start)]
    InvalidEscape { span: Span },

    /// Number literal that does not parse (e.g. `0x`, `1e`).
    #[error("invalid number literal '{text}' at position {}", span.start)]
    InvalidNumber { text: String, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedChar { span, .. } => *span,
            Self::UnterminatedString { span } => *span,
            Self::UnterminatedTemplate { span } => *span,
            Self::UnterminatedInterpolation { span } => *span,
            Self::UnterminatedComment { span } => *span,
            Self::InvalidEscape { span } => *span,
            Self::InvalidNumber { span, .. } => *span,
        }
    }

    /// Rich diagnostic with line/column info and a caret.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
